//! Working tree rebuild

use crate::git::{Repository, ensure_success, git_status};
use crate::system::System;
use anyhow::Result;

/// Arguments of the tree rebuild command
pub const READ_TREE_ARGS: [&str; 3] = ["read-tree", "-mu", "HEAD"];

/// Update the working tree according to the sparse-checkout file
///
/// Runs `git read-tree -mu HEAD` once, attached to the terminal. No checks
/// are made on the sparse-checkout file beforehand.
///
/// # Errors
///
/// Returns an error if Git cannot be started or exits with a failure
#[inline]
pub fn update_worktree(system: &dyn System, repo: &Repository) -> Result<()> {
    let output = git_status(system, &READ_TREE_ARGS, repo.root())?;
    ensure_success(&output, "git read-tree -mu HEAD")
}
