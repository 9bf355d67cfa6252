//! # devstack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`.
//!
//! Most end-to-end tests need a `docker` that behaves predictably. `FakeDocker`
//! writes a small shell script named `docker` into a private directory that the
//! test then uses as the whole `PATH`. The script appends each invocation's
//! arguments to a log file and answers `compose version` with success. A call
//! whose arguments end with `FAKE_DOCKER_FAIL_ON` exits with `FAKE_DOCKER_FAIL_EXIT`
//! (default 1); every other call exits with `FAKE_DOCKER_EXIT` (default 0).
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `devstack` binary.
pub fn devstack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("devstack").expect("Failed to find devstack binary for testing");
    cmd.env_remove("DEVSTACK_PROJECT_DIR").env_remove("RUST_LOG");
    cmd
}

/// A temporary project directory with an empty compose file.
pub fn project_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create project dir");
    fs::write(dir.path().join("docker-compose.yml"), "services: {}\n").unwrap();
    dir
}

/// A directory containing a scripted `docker` executable.
pub struct FakeDocker {
    dir: TempDir,
}

#[cfg(unix)]
impl FakeDocker {
    pub fn install() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("Failed to create bin dir");
        let log = dir.path().join("calls.log");
        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> '{}'\n\
             if [ \"$1\" = \"compose\" ] && [ \"$2\" = \"version\" ]; then exit 0; fi\n\
             if [ -n \"$FAKE_DOCKER_FAIL_ON\" ]; then\n\
               case \"$*\" in *\"$FAKE_DOCKER_FAIL_ON\") exit ${{FAKE_DOCKER_FAIL_EXIT:-1}};; esac\n\
             fi\n\
             exit ${{FAKE_DOCKER_EXIT:-0}}\n",
            log.display()
        );
        let path = dir.path().join("docker");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }
}

impl FakeDocker {
    /// Value for `PATH` that exposes only the fake `docker`.
    pub fn path_env(&self) -> &Path {
        self.dir.path()
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// One entry per invocation, arguments joined by spaces.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Calls other than the preflight version probe.
    pub fn stack_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c != "compose version")
            .collect()
    }
}

/// The compose prefix devstack passes for `project`, as logged by the fake.
pub fn compose_prefix(project: &Path) -> String {
    format!(
        "compose --env-file {} -f {}",
        project.join(".env").display(),
        project.join("docker-compose.yml").display()
    )
}
