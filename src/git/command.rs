//! Running Git through the system abstraction

use crate::error::SparseError;
use crate::system::{CommandOutput, System};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Program name used for every Git invocation
pub const GIT: &str = "git";

/// Run `git <args>` in `cwd` with captured output
///
/// Only a failure to start Git is an error here; the exit status is left to
/// the caller.
///
/// # Errors
///
/// Returns an error if the Git executable cannot be started
#[inline]
pub fn git_output(system: &dyn System, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    debug!("Running: git {} (in {})", args.join(" "), cwd.display());
    let output = system.output(GIT, args, cwd).map_err(|e| {
        return SparseError::git(format!(
            "Failed to execute git {}: {e}. Please ensure Git is installed and available in PATH",
            args.first().copied().unwrap_or_default()
        ));
    })?;
    debug!("git {} finished with {}", args.join(" "), output.describe_exit());
    Ok(output)
}

/// Run `git <args>` in `cwd` attached to the terminal
///
/// # Errors
///
/// Returns an error if the Git executable cannot be started
#[inline]
pub fn git_status(system: &dyn System, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    debug!("Running: git {} (in {})", args.join(" "), cwd.display());
    let output = system.status(GIT, args, cwd).map_err(|e| {
        return SparseError::git(format!(
            "Failed to execute git {}: {e}. Please ensure Git is installed and available in PATH",
            args.first().copied().unwrap_or_default()
        ));
    })?;
    debug!("git {} finished with {}", args.join(" "), output.describe_exit());
    Ok(output)
}

/// Turn a non-zero Git exit into a `SparseError::Git`
///
/// # Errors
///
/// Returns an error if `output` did not exit successfully
#[inline]
pub fn ensure_success(output: &CommandOutput, what: &str) -> Result<()> {
    if output.is_success() {
        return Ok(());
    }

    let stderr = output.stderr.trim();
    let message = if stderr.is_empty() {
        format!("{what} failed with {}", output.describe_exit())
    } else {
        format!("{what} failed with {}: {stderr}", output.describe_exit())
    };
    Err(SparseError::git(message).into())
}
