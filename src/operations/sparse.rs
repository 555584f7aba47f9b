//! Command routing

use crate::cli::Args;
use crate::editor::EditorCommand;
use crate::error::SparseError;
use crate::git::Repository;
use crate::operations::{Action, Outcome, add, edit, print_usage, update};
use crate::system::System;
use anyhow::Result;
use tracing::debug;

/// Coordinates a single git-sparse invocation
#[non_exhaustive]
pub struct SparseOperation<'src> {
    action: Action,
    editor: EditorCommand,
    system: &'src dyn System,
}

impl<'src> SparseOperation<'src> {
    /// Create a new operation from CLI arguments
    #[must_use]
    #[inline]
    pub fn new(args: &Args, system: &'src dyn System) -> Self {
        Self::with_action(args.action(), args.editor.as_deref(), system)
    }

    /// Create a new operation for an already decoded action
    #[must_use]
    #[inline]
    pub fn with_action(action: Action, editor: Option<&str>, system: &'src dyn System) -> Self {
        Self {
            action,
            editor: EditorCommand::resolve(system, editor),
            system,
        }
    }

    /// Execute the operation
    ///
    /// Outside a repository the usage text is printed instead and the
    /// operation still succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if Git, the editor or the filesystem fails
    #[inline]
    pub fn execute(&self) -> Result<Outcome> {
        if !self.action.requires_repository() {
            print_usage();
            return Ok(Outcome::UsageShown);
        }

        let Some(repo) = self.discover()? else {
            print_usage();
            return Ok(Outcome::UsageShown);
        };

        match &self.action {
            Action::Edit => {
                edit(self.system, &repo, &self.editor)?;
                Ok(Outcome::Edited)
            }
            Action::Add(paths) => Ok(Outcome::Added(add(self.system, &repo, paths)?)),
            Action::Update => {
                update(self.system, &repo)?;
                Ok(Outcome::Updated)
            }
            Action::Usage => {
                print_usage();
                Ok(Outcome::UsageShown)
            }
        }
    }

    /// Find the repository, or `None` when not inside one
    fn discover(&self) -> Result<Option<Repository>> {
        match Repository::discover(self.system) {
            Ok(repo) => Ok(Some(repo)),
            Err(err) => {
                if let Some(SparseError::NotARepository { message }) = err.downcast_ref::<SparseError>() {
                    debug!("Not inside a git repository: {message}");
                    return Ok(None);
                }
                Err(err)
            }
        }
    }
}
