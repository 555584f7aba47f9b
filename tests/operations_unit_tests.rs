//! Unit tests for command routing using the mock system

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use git_sparse::cli::Args;
    use git_sparse::operations::Outcome;
    use git_sparse::run_with_system;
    use git_sparse::system::{CommandOutput, MockSystem, System as _};
    use std::path::Path;

    const FILE: &str = "/home/dev/project/.git/info/sparse-checkout";

    fn project() -> MockSystem {
        MockSystem::new()
            .with_current_dir("/home/dev/project")
            .unwrap()
            .with_dir("/home/dev/project/.git")
            .unwrap()
            .with_command(
                "git",
                &["rev-parse", "--show-toplevel", "--absolute-git-dir"],
                CommandOutput::success("/home/dev/project\n/home/dev/project/.git\n"),
            )
            .unwrap()
    }

    fn run(system: &MockSystem, args: &[&str]) -> Outcome {
        let args = Args::parse_args_from(std::iter::once("git-sparse").chain(args.iter().copied()));
        run_with_system(&args, system).unwrap()
    }

    #[test]
    fn line_count_grows_by_number_of_paths() {
        let system = project();
        let batches: [&[&str]; 4] = [
            &["src/"],
            &["docs/*.md", "!docs/drafts/"],
            &["src/"],
            &["a b/c", "/*", "**/*.rs"],
        ];

        let mut expected: Vec<&str> = Vec::new();
        for batch in batches {
            let before = system
                .read_to_string(Path::new(FILE))
                .map(|contents| contents.lines().count())
                .unwrap_or(0);

            let mut args = vec!["add"];
            args.extend_from_slice(batch);
            assert_eq!(run(&system, &args), Outcome::Added(batch.len()));

            let contents = system.read_to_string(Path::new(FILE)).unwrap();
            assert_eq!(contents.lines().count(), before + batch.len());

            expected.extend_from_slice(batch);
            assert_eq!(contents.lines().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn enable_call_is_issued_only_when_flag_missing() {
        let system = project()
            .with_command(
                "git",
                &["config", "--list"],
                CommandOutput::success("core.repositoryformatversion=0\ncore.sparsecheckout=true\n"),
            )
            .unwrap();

        assert_eq!(run(&system, &["--editor", "nano"]), Outcome::Edited);

        let enables = system
            .command_lines()
            .unwrap()
            .into_iter()
            .filter(|line| line == "git config core.sparseCheckout true")
            .count();
        assert_eq!(enables, 0);
    }

    #[test]
    fn update_issues_one_read_tree_even_without_file() {
        let system = project();

        assert_eq!(run(&system, &["update"]), Outcome::Updated);

        let read_trees = system
            .invocations()
            .unwrap()
            .into_iter()
            .filter(|invocation| invocation.args.first().map(String::as_str) == Some("read-tree"))
            .count();
        assert_eq!(read_trees, 1);
        assert!(!system.exists(Path::new(FILE)));
    }

    #[test]
    fn help_and_unknown_subcommands_show_usage_without_git() {
        for args in [
            &["help"][..],
            &["help", "me"][..],
            &["frobnicate", "--now"][..],
            &["-x"][..],
        ] {
            let system = project();
            assert_eq!(run(&system, args), Outcome::UsageShown);
            assert!(system.invocations().unwrap().is_empty());
        }
    }
}
