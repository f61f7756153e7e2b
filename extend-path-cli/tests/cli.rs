//! Basic CLI surface tests: help, version, usage errors and completions.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_mode_flags() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--append"))
        .stdout(predicate::str::contains("--prepend"))
        .stdout(predicate::str::contains("--delete"))
        .stdout(predicate::str::contains("--relocate"))
        .stdout(predicate::str::contains("--environment"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--no-such-flag")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--format", "xml", "-a", "/x"])
        .assert()
        .code(2);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extend-path"))
        .stdout(predicate::str::contains("--prepend"));
}

#[test]
fn test_completions_quiet_omits_hint() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--quiet", "--completions", "zsh"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_completions_with_directories_is_usage_error() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--completions", "fish", "/opt/bin"])
        .assert()
        .code(2);
}
