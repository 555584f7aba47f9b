//! Opening files in the user's text editor

use crate::error::SparseError;
use crate::system::System;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Characters that make an editor value a shell command rather than a program
const SHELL_SYNTAX: &[char] = &[
    '|', '&', ';', '<', '>', '(', ')', '$', '`', '\\', '"', '\'', ' ', '\t', '\n', '*', '?',
    '[', '#', '~', '=', '%',
];

/// A resolved editor command line, without the file argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Resolve the editor from a configured command string
    ///
    /// A value naming an existing file, or one without shell syntax, is run
    /// directly. Anything else (`code --wait`, quoted paths) goes through
    /// `sh -c '<editor> "$@"'` the way Git runs `$EDITOR`. On Windows, where
    /// no `sh` can be assumed, such values are split on whitespace.
    ///
    /// `None`, empty and whitespace-only values fall back to the platform's
    /// default opener.
    #[must_use]
    #[inline]
    pub fn resolve(system: &dyn System, configured: Option<&str>) -> Self {
        let Some(configured) = configured.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::default_opener();
        };

        if system.exists(Path::new(configured)) || !configured.contains(SHELL_SYNTAX) {
            return Self::from_parts(configured, &[]);
        }

        if cfg!(target_os = "windows") {
            let mut parts = configured.split_whitespace();
            let program = parts.next().unwrap_or(configured);
            return Self {
                program: program.to_owned(),
                args: parts.map(str::to_owned).collect(),
            };
        }

        let script = format!("{configured} \"$@\"");
        Self::from_parts("sh", &["-c", &script, configured])
    }

    /// The platform's "open with the preferred application" command
    #[must_use]
    #[inline]
    pub fn default_opener() -> Self {
        if cfg!(target_os = "windows") {
            return Self::from_parts("cmd", &["/C", "start", "/WAIT", ""]);
        }
        if cfg!(target_os = "macos") {
            return Self::from_parts("open", &["-W", "-t"]);
        }
        return Self::from_parts("xdg-open", &[]);
    }

    fn from_parts(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
        }
    }

    /// Open `file` and block until the editor exits
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The editor cannot be started
    /// - The editor exits with a failure
    #[inline]
    pub fn open(&self, system: &dyn System, file: &Path, cwd: &Path) -> Result<()> {
        let file_arg = file.to_string_lossy();
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.push(&file_arg);

        debug!("Launching editor: {} {}", self.program, args.join(" "));
        let output = system.status(&self.program, &args, cwd).map_err(|e| {
            return SparseError::editor(format!(
                "Failed to launch editor '{}': {e}. Set $EDITOR to your preferred editor",
                self.program
            ));
        })?;

        if !output.is_success() {
            return Err(SparseError::editor(format!(
                "Editor '{}' failed with {}",
                self.program,
                output.describe_exit()
            ))
            .into());
        }

        Ok(())
    }
}
