//! `git sparse` without a subcommand

use crate::checkout_file::CheckoutFile;
use crate::editor::EditorCommand;
use crate::git::{Repository, ensure_sparse};
use crate::operations::UPDATE_HINT;
use crate::system::System;
use anyhow::Result;
use tracing::info;

/// Enable sparse checkout and open the sparse-checkout file in the editor
///
/// The file is created empty first when it does not exist yet.
///
/// # Errors
///
/// Returns an error if:
/// - Sparse checkout cannot be enabled
/// - The sparse-checkout file cannot be created
/// - The editor cannot be started or fails
#[inline]
pub fn edit(system: &dyn System, repo: &Repository, editor: &EditorCommand) -> Result<()> {
    ensure_sparse(system, repo)?;

    info!("Opening text editor...");
    info!("Add paths to checkout, then save and close.");
    let file = CheckoutFile::for_repository(repo);
    file.ensure(system)?;
    editor.open(system, file.path(), repo.root())?;

    info!("{UPDATE_HINT}");
    Ok(())
}
