//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for git-sparse operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SparseError {
    /// Not a Repository - the current directory is outside any Git working tree
    #[error("Not a git repository: {message}")]
    NotARepository { message: String },

    /// Editor Error - the editor could not be started or exited with a failure
    #[error("Editor error: {message}")]
    Editor { message: String },

    /// Git Error - Git operation failed
    #[error("Git error: {message}")]
    Git { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl SparseError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::NotARepository { .. } => 1,
            Self::Editor { .. } => 3,
            Self::Git { .. } => 4,
            Self::Filesystem { .. } => 5,
        }
    }

    /// Create a not-a-repository error
    #[inline]
    pub fn not_a_repository<S: Into<String>>(message: S) -> Self {
        Self::NotARepository {
            message: message.into(),
        }
    }

    /// Create an editor error
    #[inline]
    pub fn editor<S: Into<String>>(message: S) -> Self {
        Self::Editor {
            message: message.into(),
        }
    }

    /// Create a git error
    #[inline]
    pub fn git<S: Into<String>>(message: S) -> Self {
        Self::Git {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_category() {
        assert_eq!(SparseError::editor("x").exit_code(), 3);
        assert_eq!(SparseError::git("x").exit_code(), 4);
        assert_eq!(SparseError::filesystem("x").exit_code(), 5);
    }

    #[test]
    fn display_includes_category_and_message() {
        let err = SparseError::git("read-tree exited with code 128");
        assert_eq!(err.to_string(), "Git error: read-tree exited with code 128");
    }
}
