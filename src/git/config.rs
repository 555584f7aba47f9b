//! The `core.sparseCheckout` configuration flag

use crate::git::{Repository, ensure_success, git_output};
use crate::system::System;
use anyhow::{Context as _, Result};
use regex::Regex;
use tracing::{debug, info};

/// Marker searched for in the `git config --list` dump
const SPARSE_MARKER: &str = r"(?i)sparsecheckout=true";

/// What `ensure_sparse` had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseMode {
    /// The flag was already set; nothing was written
    AlreadyEnabled,
    /// The flag was missing and has been set
    Enabled,
}

/// Check if the repository is configured for sparse checkouts
///
/// # Errors
///
/// Returns an error if `git config --list` cannot be run or fails
#[inline]
pub fn is_sparse(system: &dyn System, repo: &Repository) -> Result<bool> {
    let output = git_output(system, &["config", "--list"], repo.root())?;
    ensure_success(&output, "git config --list")?;

    let marker = Regex::new(SPARSE_MARKER).context("Invalid sparse checkout marker pattern")?;
    Ok(marker.is_match(&output.stdout))
}

/// Configure the repository to accept sparse checkouts
///
/// Issues at most one `git config core.sparseCheckout true`, and none when
/// the flag is already set.
///
/// # Errors
///
/// Returns an error if either Git call cannot be run or fails
#[inline]
pub fn ensure_sparse(system: &dyn System, repo: &Repository) -> Result<SparseMode> {
    if is_sparse(system, repo)? {
        debug!("Sparse checkout already active");
        return Ok(SparseMode::AlreadyEnabled);
    }

    info!("Sparse checkout not active.");
    info!("Setting core.sparseCheckout to true...");
    let output = git_output(
        system,
        &["config", "core.sparseCheckout", "true"],
        repo.root(),
    )?;
    ensure_success(&output, "git config core.sparseCheckout true")?;

    Ok(SparseMode::Enabled)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::error::SparseError;
    use crate::system::{CommandOutput, MockSystem};

    fn repo() -> Repository {
        Repository::new("/repo", "/repo/.git")
    }

    fn system_with_config(dump: &str) -> MockSystem {
        MockSystem::new()
            .with_command("git", &["config", "--list"], CommandOutput::success(dump))
            .unwrap()
    }

    #[test]
    fn detects_flag_case_insensitively() {
        let system = system_with_config("user.name=Test\ncore.sparsecheckout=true\n");
        assert!(is_sparse(&system, &repo()).unwrap());

        let system = system_with_config("core.sparseCheckout=TRUE\n");
        assert!(is_sparse(&system, &repo()).unwrap());
    }

    #[test]
    fn false_flag_is_not_sparse() {
        let system = system_with_config("core.sparsecheckout=false\n");
        assert!(!is_sparse(&system, &repo()).unwrap());
    }

    #[test]
    fn already_enabled_issues_no_set_call() {
        let system = system_with_config("core.sparsecheckout=true\n");

        let mode = ensure_sparse(&system, &repo()).unwrap();
        assert_eq!(mode, SparseMode::AlreadyEnabled);
        assert_eq!(system.command_lines().unwrap(), vec!["git config --list"]);
    }

    #[test]
    fn missing_flag_is_set_once() {
        let system = system_with_config("core.bare=false\n");

        let mode = ensure_sparse(&system, &repo()).unwrap();
        assert_eq!(mode, SparseMode::Enabled);
        assert_eq!(
            system.command_lines().unwrap(),
            vec!["git config --list", "git config core.sparseCheckout true"]
        );
        assert!(
            system
                .invocations()
                .unwrap()
                .iter()
                .all(|invocation| invocation.cwd.as_path() == repo().root())
        );
    }

    #[test]
    fn failing_set_is_reported() {
        let system = system_with_config("")
            .with_command(
                "git",
                &["config", "core.sparseCheckout", "true"],
                CommandOutput::failure(255, "error: could not lock config file .git/config\n"),
            )
            .unwrap();

        let err = ensure_sparse(&system, &repo()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SparseError>(),
            Some(SparseError::Git { .. })
        ));
        assert!(err.to_string().contains("could not lock config file"));
    }
}
