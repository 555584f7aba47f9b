use crate::operations::Action;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Command-line arguments for git-sparse
#[derive(Parser, Debug, Clone)]
#[command(name = "git-sparse")]
#[command(about = "A Git helper command to make sparse checkouts easier")]
#[command(
    long_about = "A Git helper command to make sparse checkouts easier.\n\nWithout a subcommand, \
                  enables sparse checkout and opens the sparse-checkout file in your editor."
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Editor used to open the sparse-checkout file (defaults to the OS opener)
    #[arg(
        long,
        env = "EDITOR",
        value_name = "COMMAND",
        global = true,
        hide_env_values = true
    )]
    pub editor: Option<String>,

    #[command(subcommand)]
    pub command: Option<SparseCommand>,
}

/// Subcommands understood by git-sparse
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SparseCommand {
    /// Add paths to the sparse-checkout file (alternative to editing it)
    Add {
        /// Paths or patterns to keep in the working tree, one line each
        #[arg(
            required = true,
            value_name = "PATH",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        paths: Vec<String>,
    },

    /// Update the working tree to show the selected paths
    Update {
        /// Ignored
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<OsString>,
    },

    /// Show usage and an example workflow
    Help {
        /// Ignored
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<OsString>,
    },

    /// Anything else is answered with the usage text
    #[command(external_subcommand)]
    Unrecognized(Vec<OsString>),
}

impl Args {
    /// Parse the process arguments, exiting on usage errors
    #[must_use]
    #[inline]
    pub fn parse_args() -> Self {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse an argument list, exiting on usage errors
    ///
    /// `--help` and `--version` print and exit 0 as usual.
    #[must_use]
    #[inline]
    pub fn parse_args_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_args_from(args).unwrap_or_else(|err| err.exit())
    }

    /// Parse an argument list
    ///
    /// A flag nobody defines (`git sparse -x`) is treated like an unknown
    /// subcommand and answered with the usage text, not a clap error.
    ///
    /// # Errors
    ///
    /// Returns the clap error for every other malformed command line
    #[inline]
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(args.iter().cloned()) {
            Err(err) if err.kind() == ErrorKind::UnknownArgument => Ok(Self {
                verbose: false,
                editor: None,
                command: Some(SparseCommand::Unrecognized(
                    args.into_iter().skip(1).collect(),
                )),
            }),
            result => result,
        }
    }

    /// Decode the parsed arguments into the action to perform
    ///
    /// No subcommand means editing the sparse-checkout file.
    #[must_use]
    #[inline]
    pub fn action(&self) -> Action {
        match &self.command {
            None => Action::Edit,
            Some(SparseCommand::Add { paths }) => Action::Add(paths.clone()),
            Some(SparseCommand::Update { .. }) => Action::Update,
            Some(SparseCommand::Help { .. } | SparseCommand::Unrecognized(_)) => Action::Usage,
        }
    }
}
