//! Embedded usage text

/// Usage text printed for `help`, unrecognized subcommands and outside a repository
pub const USAGE: &str = r#"git-sparse: a Git helper command to make sparse checkouts easier.

Usage:
  $ cd <git-repository>
  $ git sparse                          # open the sparse-checkout file for editing
  $ git sparse add <path1> <path2> ...  # add paths (alternative to 'git sparse')
  $ git sparse update                   # update the working tree to show the paths
  $ git sparse help                     # show this text

Example workflow when cloning a new repository:
  $ git clone -b <branch> -n --depth=1 <repo-url>  # shallow clone of one branch, no checkout
  $ cd <repo>
  $ git sparse add <path1> <path2> ... <pathN>
  $ git sparse update

Notes:
  - To see the whole repository again, add "/*" to the sparse-checkout file
    and run "git sparse update".
  - To change the editor, set the EDITOR environment variable, e.g.:
      $ export EDITOR=nano
"#;

/// Print the usage text to standard output
#[inline]
pub fn print_usage() {
    print!("{USAGE}");
}
