//! Operations module
//!
//! Routes a decoded command to editing, adding, updating or showing usage

pub mod add;
pub mod edit;
pub mod sparse;
pub mod update;
pub mod usage;

pub use add::*;
pub use edit::*;
pub use sparse::*;
pub use update::*;
pub use usage::*;

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enable sparse checkout and open the sparse-checkout file in the editor
    Edit,
    /// Enable sparse checkout and append the paths to the sparse-checkout file
    Add(Vec<String>),
    /// Rebuild the working tree from the sparse-checkout file
    Update,
    /// Print the usage text
    Usage,
}

impl Action {
    /// Whether the action has to locate a repository first
    #[must_use]
    #[inline]
    pub const fn requires_repository(&self) -> bool {
        !matches!(*self, Self::Usage)
    }
}

/// What an invocation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The editor was opened on the sparse-checkout file and exited cleanly
    Edited,
    /// Number of lines appended
    Added(usize),
    /// `git read-tree` rebuilt the working tree
    Updated,
    /// The usage text was printed, either on request or outside a repository
    UsageShown,
}

/// Follow-up hint printed after the sparse-checkout file changed
pub const UPDATE_HINT: &str = "Run \"git sparse update\" to see changes.";
