//! `git-sparse` - A Git helper command to make sparse checkouts easier
//!
//! This library toggles `core.sparseCheckout`, keeps the sparse-checkout
//! pattern file in place, opens it in an editor or appends paths to it, and
//! rebuilds the working tree with `git read-tree`. Pattern matching and the
//! checkout itself are left entirely to Git.

pub mod checkout_file;
pub mod cli;
pub mod editor;
pub mod error;
pub mod git;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use operations::{Outcome, SparseOperation};
use system::{RealSystem, System};

/// Main entry point for the git-sparse library
///
/// # Errors
///
/// Returns an error if Git, the editor or the filesystem fails
pub fn run(args: &Args) -> Result<Outcome> {
    run_with_system(args, &RealSystem)
}

/// Run git-sparse against an arbitrary system implementation
///
/// # Errors
///
/// Returns an error if Git, the editor or the filesystem fails
pub fn run_with_system(args: &Args, system: &dyn System) -> Result<Outcome> {
    SparseOperation::new(args, system).execute()
}
