//! # devstack CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `devstack` binary: standard flags, subcommand
//! listing and argument errors that clap rejects before any work is done.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let assert = devstack_cmd().arg("--help").assert().success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for sub in ["up", "down", "nuke", "logs", "exec", "studio", "ps"] {
        assert!(output.contains(sub), "help should mention '{}'", sub);
    }
}

#[test]
fn test_version_flag() {
    devstack_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    devstack_cmd().assert().failure().code(2);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    devstack_cmd().arg("restart").assert().failure().code(2);
}

#[test]
fn test_exec_requires_service() {
    devstack_cmd().arg("exec").assert().failure().code(2);
}

#[test]
fn test_subcommand_help() {
    devstack_cmd()
        .args(["logs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--tail"))
        .stdout(predicate::str::contains("--follow"));
}
