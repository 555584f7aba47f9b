//! Repository discovery

use crate::error::SparseError;
use crate::git::git_output;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the sparse-checkout file relative to the git metadata directory
pub const SPARSE_CHECKOUT_FILE: &str = "info/sparse-checkout";

/// The repository the command is operating on
///
/// Discovered once per invocation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    root: PathBuf,
    git_dir: PathBuf,
}

impl Repository {
    /// Build a repository from already known paths
    #[must_use]
    #[inline]
    pub fn new<R: Into<PathBuf>, G: Into<PathBuf>>(root: R, git_dir: G) -> Self {
        Self {
            root: root.into(),
            git_dir: git_dir.into(),
        }
    }

    /// Discover the repository containing the current directory
    ///
    /// Asks Git for both the top-level directory and the absolute git
    /// directory, so linked worktrees and submodules (where `.git` is a file)
    /// resolve to their real metadata directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory is not inside a Git working tree (`SparseError::NotARepository`)
    /// - Git cannot be started or reports something unusable (`SparseError::Git`)
    #[inline]
    pub fn discover(system: &dyn System) -> Result<Self> {
        let cwd = system
            .current_dir()
            .context("Cannot determine the current directory")?;

        let output = git_output(
            system,
            &["rev-parse", "--show-toplevel", "--absolute-git-dir"],
            &cwd,
        )?;

        if !output.is_success() {
            return Err(SparseError::not_a_repository(output.stderr.trim().to_owned()).into());
        }

        let repository = Self::parse_rev_parse(&output.stdout)?;
        debug!(
            "Discovered repository root {} with git dir {}",
            repository.root.display(),
            repository.git_dir.display()
        );
        Ok(repository)
    }

    /// Parse the two lines printed by `git rev-parse --show-toplevel --absolute-git-dir`
    fn parse_rev_parse(stdout: &str) -> Result<Self> {
        let mut lines = stdout.lines().map(str::trim).filter(|line| !line.is_empty());
        match (lines.next(), lines.next()) {
            (Some(root), Some(git_dir)) => Ok(Self::new(root, git_dir)),
            _ => Err(SparseError::git(format!(
                "Unexpected output from git rev-parse: '{}'",
                stdout.trim()
            ))
            .into()),
        }
    }

    /// Absolute path of the working tree root
    #[must_use]
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the git metadata directory
    #[must_use]
    #[inline]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Path of the sparse-checkout pattern file
    #[must_use]
    #[inline]
    pub fn sparse_checkout_path(&self) -> PathBuf {
        self.git_dir.join(SPARSE_CHECKOUT_FILE)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::{CommandOutput, MockSystem};

    const REV_PARSE: [&str; 3] = ["rev-parse", "--show-toplevel", "--absolute-git-dir"];

    #[test]
    fn discover_reads_root_and_git_dir() {
        let system = MockSystem::new()
            .with_current_dir("/work/project/src")
            .unwrap()
            .with_command(
                "git",
                &REV_PARSE,
                CommandOutput::success("/work/project\n/work/project/.git\n"),
            )
            .unwrap();

        let repo = Repository::discover(&system).unwrap();
        assert_eq!(repo.root(), Path::new("/work/project"));
        assert_eq!(repo.git_dir(), Path::new("/work/project/.git"));
        assert_eq!(
            repo.sparse_checkout_path(),
            PathBuf::from("/work/project/.git/info/sparse-checkout")
        );

        let invocations = system.invocations().unwrap();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].cwd, PathBuf::from("/work/project/src"));
    }

    #[test]
    fn discover_in_linked_worktree_uses_reported_git_dir() {
        let system = MockSystem::new()
            .with_command(
                "git",
                &REV_PARSE,
                CommandOutput::success("/work/feature\n/work/project/.git/worktrees/feature\n"),
            )
            .unwrap();

        let repo = Repository::discover(&system).unwrap();
        assert_eq!(
            repo.sparse_checkout_path(),
            PathBuf::from("/work/project/.git/worktrees/feature/info/sparse-checkout")
        );
    }

    #[test]
    fn discover_outside_repository() {
        let system = MockSystem::new()
            .with_command(
                "git",
                &REV_PARSE,
                CommandOutput::failure(
                    128,
                    "fatal: not a git repository (or any of the parent directories): .git\n",
                ),
            )
            .unwrap();

        let err = Repository::discover(&system).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SparseError>(),
            Some(SparseError::NotARepository { .. })
        ));
    }

    #[test]
    fn discover_rejects_truncated_output() {
        let system = MockSystem::new()
            .with_command("git", &REV_PARSE, CommandOutput::success("/work/project\n"))
            .unwrap();

        let err = Repository::discover(&system).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SparseError>(),
            Some(SparseError::Git { .. })
        ));
    }
}
