// Integration tests for the niceness CLI argument surface.
//
// These use assert_cmd to invoke the binary and verify flag handling,
// exit codes, and stderr messages. End-to-end scoring runs live in
// cli_e2e.rs.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the niceness binary.
fn niceness() -> Command {
    Command::cargo_bin("niceness").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    niceness()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("niceness"));
}

#[test]
fn cli_help_flag() {
    niceness()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted rating score"));
}

#[test]
fn score_requires_values() {
    niceness()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn trust_requires_counts() {
    niceness()
        .arg("trust")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn eval_requires_both_values_and_counts() {
    niceness()
        .args(["eval", "--values", "4.0,70,4.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--counts"));
}

#[test]
fn score_rejects_unknown_format() {
    niceness()
        .args(["score", "--values", "1,2,3", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    niceness()
        .args(["score", "--values", "1,2,3", "-q", "-v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
