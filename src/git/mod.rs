//! Git operations module
//!
//! Handles repository discovery, the sparse-checkout config flag and the
//! working tree rebuild

pub mod command;
pub mod config;
pub mod repository;
pub mod worktree;

pub use command::*;
pub use config::*;
pub use repository::*;
pub use worktree::*;
