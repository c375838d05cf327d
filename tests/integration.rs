// Integration tests for the score-merge CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and help output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the score-merge binary.
fn score_merge() -> Command {
    Command::cargo_bin("score-merge").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    score_merge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("score-merge"));
}

#[test]
fn cli_help_flag() {
    score_merge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assessment history"));
}

#[test]
fn merge_requires_score_file() {
    score_merge()
        .arg("merge")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn history_requires_product() {
    score_merge()
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn merge_rejects_malformed_date() {
    score_merge()
        .args(["merge", "score.json", "--date", "May 20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    score_merge()
        .args(["-q", "-v", "merge", "score.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_root_is_a_runtime_failure() {
    score_merge()
        .args(["--root", "/nonexistent/score-merge-root", "merge", "score.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
