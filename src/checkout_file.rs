//! The sparse-checkout pattern file
//!
//! The file belongs to Git. This module only makes sure it exists and appends
//! lines to it; patterns are never parsed or rewritten.

use crate::error::SparseError;
use crate::git::Repository;
use crate::system::System;
use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle on `<git-dir>/info/sparse-checkout`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFile {
    path: PathBuf,
}

impl CheckoutFile {
    /// Create a handle for an explicit path
    #[must_use]
    #[inline]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create the handle for a repository's sparse-checkout file
    #[must_use]
    #[inline]
    pub fn for_repository(repo: &Repository) -> Self {
        Self::new(repo.sparse_checkout_path())
    }

    #[must_use]
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the info directory and the file exist
    ///
    /// The directory is created recursively when missing; losing a creation
    /// race to another process is not an error. The file is opened for
    /// append and closed, so existing patterns are never truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created
    #[inline]
    pub fn ensure(&self, system: &dyn System) -> Result<()> {
        if let Some(dir) = self.path.parent()
            && !system.exists(dir)
        {
            debug!("Creating {}", dir.display());
            match system.create_dir_all(dir) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("{} was created concurrently", dir.display());
                }
                Err(e) => {
                    return Err(SparseError::filesystem(format!(
                        "Cannot create directory '{}': {e}",
                        dir.display()
                    ))
                    .into());
                }
            }
        }

        system.touch(&self.path).map_err(|e| {
            return SparseError::filesystem(format!(
                "Cannot create sparse-checkout file '{}': {e}",
                self.path.display()
            ));
        })?;
        Ok(())
    }

    /// Append each path as its own line, in the given order
    ///
    /// Paths are written verbatim. When the file already has content without
    /// a trailing newline, one is written first so the first path does not
    /// merge into the last existing line.
    ///
    /// Returns the number of lines appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written
    #[inline]
    pub fn append<S: AsRef<str>>(&self, system: &dyn System, paths: &[S]) -> Result<usize> {
        if paths.is_empty() {
            return Ok(0);
        }

        if self.needs_line_break(system)? {
            self.write(system, "\n")?;
        }

        for path in paths {
            let path = path.as_ref();
            debug!("Adding '{path}' to {}", self.path.display());
            self.write(system, &format!("{path}\n"))?;
        }

        Ok(paths.len())
    }

    fn needs_line_break(&self, system: &dyn System) -> Result<bool> {
        if !system.exists(&self.path) {
            return Ok(false);
        }

        let contents = system.read(&self.path).map_err(|e| {
            return SparseError::filesystem(format!(
                "Cannot read sparse-checkout file '{}': {e}",
                self.path.display()
            ));
        })?;
        Ok(contents.last().is_some_and(|byte| *byte != b'\n'))
    }

    fn write(&self, system: &dyn System, line: &str) -> Result<()> {
        system.append(&self.path, line.as_bytes()).map_err(|e| {
            return SparseError::filesystem(format!(
                "Cannot write to sparse-checkout file '{}': {e}",
                self.path.display()
            ));
        })?;
        Ok(())
    }
}
