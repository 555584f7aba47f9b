//! System abstraction for filesystem and subprocess operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Result of running an external program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output (empty for interactive runs)
    pub stdout: String,
    /// Captured standard error (empty for interactive runs)
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with the given standard output
    #[must_use]
    #[inline]
    pub fn success(stdout: &str) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.to_owned(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and standard error
    #[must_use]
    #[inline]
    pub fn failure(code: i32, stderr: &str) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_owned(),
        }
    }

    /// Whether the process exited with status zero
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Human readable exit description for error messages
    #[must_use]
    #[inline]
    pub fn describe_exit(&self) -> String {
        self.code.map_or_else(
            || "terminated by signal".to_owned(),
            |code| format!("exit code {code}"),
        )
    }
}

/// Unified trait for system operations (filesystem + subprocesses)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `std::process`
/// - `MockSystem`: Test implementation using in-memory storage and scripted commands
pub trait System {
    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Open a file in append mode and close it, creating it without truncation
    fn touch(&self, path: &Path) -> io::Result<()>;

    /// Append bytes to an existing or new file
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Read entire file contents as raw bytes
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Run a program with captured output and wait for it
    fn output(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput>;

    /// Run a program attached to the terminal and wait for it
    ///
    /// The returned output carries only the exit code.
    fn status(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput>;
}
