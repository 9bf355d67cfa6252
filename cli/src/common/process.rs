//! # devstack Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every side effect devstack has on the container runtime goes through one
//! narrow capability: run an argument vector in a working directory and report
//! the exit status. This module defines that capability as the `ProcessRunner`
//! trait and provides `SystemRunner`, the implementation used by the binary.
//!
//! ## Architecture
//!
//! - **`Invocation`**: Program name, discrete argument vector and working directory.
//!   Arguments are never joined into a shell string, so operator-supplied tokens
//!   (e.g. the tail of `devstack exec`) reach the child verbatim.
//! - **`OutputMode`**: `Inherit` forwards stdio to the operator's terminal (used
//!   for every visible step, including `logs --follow`); `Quiet` discards it (used
//!   for preflight probes).
//! - **`RunStatus`**: The child's exit code, or `None` when it was terminated by a
//!   signal.
//! - **`ProcessRunner`**: `resolve` looks a program up on `PATH`, `run` executes an
//!   invocation and waits for it to exit.
//!
//! Tests substitute `testing::RecordingRunner`, which records invocations instead
//! of spawning anything.
//!
//! ## Usage
//!
//! ```rust
//! let runner = SystemRunner;
//! let invocation = Invocation::new("docker", ["compose", "version"], project_dir);
//! let status = runner.run(&invocation, OutputMode::Quiet).await?;
//! if !status.success() { /* ... */ }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, trace};

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares the operator's terminal.
    Inherit,
    /// Child's stdin/stdout/stderr are discarded.
    Quiet,
}

/// A single external command: program, argument vector and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Space-joined rendering for display and error messages. Not shell-quoted.
    pub fn command_line(&self) -> String {
        self.argv().join(" ")
    }
}

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    code: Option<i32>,
}

impl RunStatus {
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to locate and run external programs.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Returns the full path of `program` if it can be found on `PATH`.
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Runs `invocation` to completion. An `Err` means the child could not be
    /// started at all; a nonzero exit is reported through `RunStatus`.
    async fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<RunStatus>;
}

/// Runs real child processes through `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        let found = which::which(program).ok();
        trace!("Resolved '{}' to {:?}", program, found);
        found
    }

    async fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<RunStatus> {
        debug!(
            "Spawning {:?} in {} ({:?})",
            invocation.argv(),
            invocation.cwd.display(),
            mode
        );
        let mut command = tokio::process::Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        if mode == OutputMode::Quiet {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        let status = command
            .status()
            .await
            .with_context(|| format!("Failed to start '{}'", invocation.command_line()))?;
        debug!("'{}' exited with {:?}", invocation.program, status.code());
        Ok(RunStatus::from_code(status.code()))
    }
}
