//! `git sparse update`

use crate::git::{Repository, update_worktree};
use crate::system::System;
use anyhow::Result;
use tracing::debug;

/// Rebuild the working tree from the current sparse-checkout file
///
/// # Errors
///
/// Returns an error if `git read-tree` cannot be run or fails
#[inline]
pub fn update(system: &dyn System, repo: &Repository) -> Result<()> {
    debug!("Updating working tree in {}", repo.root().display());
    update_worktree(system, repo)
}
