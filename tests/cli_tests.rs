//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// A command running in `dir` that cannot discover any repository above it
fn command_outside_repository(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-sparse").unwrap();
    cmd.current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .env_remove("EDITOR");
    cmd
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("git-sparse").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-sparse"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("git-sparse").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A Git helper command to make sparse checkouts easier",
        ));
}

#[test]
fn test_help_subcommand_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    command_outside_repository(temp_dir.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git sparse add <path1> <path2>"))
        .stdout(predicate::str::contains("Example workflow"));
}

#[test]
fn test_unrecognized_subcommand_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    command_outside_repository(temp_dir.path())
        .args(["checkout", "main"])
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("git sparse update"));
}

#[test]
fn test_add_without_paths_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    command_outside_repository(temp_dir.path())
        .arg("add")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn test_outside_repository_prints_usage_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    for args in [&[][..], &["add", "src/"][..], &["update"][..]] {
        command_outside_repository(temp_dir.path())
            .args(args)
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::contains("Example workflow"));
    }

    assert!(!temp_dir.path().join(".git").exists());
}

#[test]
fn test_help_with_extra_words_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    command_outside_repository(temp_dir.path())
        .args(["help", "me"])
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Example workflow"));
}

#[test]
fn test_leading_unknown_flag_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    for args in [&["-x"][..], &["--bogus", "src/"][..]] {
        command_outside_repository(temp_dir.path())
            .args(args)
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::contains("git sparse add <path1> <path2>"));
    }
}

#[test]
fn test_update_with_extra_words_is_not_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    command_outside_repository(temp_dir.path())
        .args(["update", "now"])
        .assert()
        .success()
        .code(0)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_add_accepts_hyphenated_paths() {
    let temp_dir = TempDir::new().unwrap();
    command_outside_repository(temp_dir.path())
        .args(["add", "-foo"])
        .assert()
        .success()
        .code(0)
        .stderr(predicate::str::is_empty());
}
