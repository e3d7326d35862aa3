//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("envkeys") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_database_is_the_only_subcommand() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "database");
    assert_stdout_excludes(&output, "completions");

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_bool_reports_variable() {
    let t = Test::with_env(&[("DATABASE_SSL", "sometimes")]);

    let output = t.database("staging");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid boolean for DATABASE_SSL");
}
