//! `git sparse add <path>...`

use crate::checkout_file::CheckoutFile;
use crate::git::{Repository, ensure_sparse};
use crate::operations::UPDATE_HINT;
use crate::system::System;
use anyhow::Result;
use tracing::{debug, info};

/// Enable sparse checkout and append each path to the sparse-checkout file
///
/// Paths are written verbatim, one per line, without de-duplication.
/// Returns the number of lines appended.
///
/// # Errors
///
/// Returns an error if:
/// - Sparse checkout cannot be enabled
/// - The sparse-checkout file cannot be created or written
#[inline]
pub fn add(system: &dyn System, repo: &Repository, paths: &[String]) -> Result<usize> {
    ensure_sparse(system, repo)?;

    let file = CheckoutFile::for_repository(repo);
    file.ensure(system)?;
    let added = file.append(system, paths)?;
    debug!("Appended {added} line(s) to {}", file.path().display());

    info!("Done!");
    info!("{UPDATE_HINT}");
    Ok(added)
}
