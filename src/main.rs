//! # `git-sparse`
//!
//! Git helper command to make sparse checkouts easier.
//!
//! ## Usage
//!
//! ```sh
//! cd <git-repository>
//! git sparse                         # opens the sparse-checkout file for editing
//! git sparse add <path1> <path2> ... # adds paths (alternative to 'git sparse')
//! git sparse update                  # updates the working tree to show the paths
//! ```
//!
//! Installed on `PATH` as `git-sparse`, Git picks it up as the `sparse`
//! subcommand.

use git_sparse::cli::Args;
use git_sparse::error::SparseError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse_args();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .without_time()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stdout()))
        .with_env_filter(filter)
        .init();

    match git_sparse::run(&args) {
        Ok(_) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<SparseError>()
                    .map_or(1, SparseError::exit_code),
            );
        }
    }
}
