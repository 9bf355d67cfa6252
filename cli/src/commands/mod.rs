//! # devstack Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module is the dispatcher behind every `devstack` subcommand. Each
//! subcommand maps one operator intent onto `docker compose`:
//!
//! | Command  | Compose invocation                                   | Nonzero exit |
//! |----------|------------------------------------------------------|--------------|
//! | `up`     | `up -d [--build]`, then `ps -a`                      | fatal        |
//! | `down`   | `down [-v] --remove-orphans`                         | fatal        |
//! | `nuke`   | `down -v --rmi local\|all --remove-orphans`          | fatal        |
//! | `logs`   | `logs --tail N [-f] [SERVICE]`                       | reported     |
//! | `exec`   | `exec SERVICE COMMAND...`                            | reported     |
//! | `studio` | `up -d studio`                                       | fatal        |
//! | `ps`     | `ps -a`                                              | fatal        |
//!
//! ## Architecture
//!
//! `dispatch` runs the same linear sequence for every subcommand:
//! 1. Validate usage (e.g. `exec` needs at least one command token).
//! 2. Preflight: the orchestration tool must resolve on `PATH` and answer
//!    `compose version` (`common::system`).
//! 3. Bootstrap the environment file from its template if it is missing
//!    (`common::fs::copy`), then require that it exists.
//! 4. Hand off to the subcommand's `handle_*` function, which builds its
//!    invocation(s) and runs them through `Stack::run_step`.
//!
//! `Stack` bundles the resolved `StackConfig` with the `ProcessRunner`, so handlers
//! never touch `std::process` directly and tests can swap in a recording runner.
//!
use crate::common::fs::copy::{self, Bootstrap};
use crate::common::process::{Invocation, OutputMode, ProcessRunner, RunStatus};
use crate::common::{system, ui};
use crate::core::config::StackConfig;
use crate::core::error::{Result, StackError};
use clap::Subcommand;
use tracing::{debug, info, warn};

/// Implements `devstack down`.
pub mod down;
/// Implements `devstack exec`.
pub mod exec;
/// Implements `devstack logs`.
pub mod logs;
/// Implements `devstack nuke`.
pub mod nuke;
/// Implements `devstack ps`.
pub mod ps;
/// Implements `devstack studio`.
pub mod studio;
/// Implements `devstack up`.
pub mod up;

/// All `devstack` subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the stack (api + db) in the background.
    Up(up::UpArgs),
    /// Stop the stack and remove its containers and networks.
    Down(down::DownArgs),
    /// Remove the stack's volumes and locally built images.
    Nuke(nuke::NukeArgs),
    /// Show service logs.
    Logs(logs::LogsArgs),
    /// Run a command inside a service container.
    Exec(exec::ExecArgs),
    /// Start the database admin UI.
    Studio(studio::StudioArgs),
    /// Show service status.
    Ps(ps::PsArgs),
}

impl Commands {
    /// Argument checks clap cannot express. Runs before anything is spawned.
    fn validate(&self) -> Result<()> {
        match self {
            Commands::Exec(args) => exec::validate(args),
            _ => Ok(()),
        }
    }
}

/// Whether a nonzero exit from a step ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Return `StackError::ExternalCommand`.
    Abort,
    /// Tell the operator and carry on.
    Report,
}

/// Execution context shared by all handlers.
#[derive(Debug)]
pub struct Stack<'a, R: ProcessRunner> {
    pub config: &'a StackConfig,
    pub runner: &'a R,
}

impl<'a, R: ProcessRunner> Stack<'a, R> {
    pub fn new(config: &'a StackConfig, runner: &'a R) -> Self {
        Self { config, runner }
    }

    /// Runs preflight checks and bootstraps the environment file.
    pub async fn preflight(&self) -> Result<()> {
        system::ensure_tools(self.runner, self.config).await?;
        ensure_env_file(self.config)
    }

    /// Announces `invocation`, runs it with the operator's terminal attached and
    /// waits for it to exit.
    pub async fn run_step(
        &self,
        title: &str,
        invocation: &Invocation,
        on_failure: OnFailure,
    ) -> Result<RunStatus> {
        ui::print_step(title, invocation);
        let status = self.runner.run(invocation, OutputMode::Inherit).await?;
        if status.success() {
            debug!("Step '{}' succeeded.", title);
            return Ok(status);
        }

        match on_failure {
            OnFailure::Abort => Err(StackError::ExternalCommand {
                cmd: invocation.command_line(),
                code: status.code(),
            }
            .into()),
            OnFailure::Report => {
                warn!(
                    "'{}' exited with {:?}; continuing.",
                    invocation.command_line(),
                    status.code()
                );
                match status.code() {
                    Some(code) => eprintln!("⚠️  Command exited with status {}.", code),
                    None => eprintln!("⚠️  Command was terminated by a signal."),
                }
                Ok(status)
            }
        }
    }
}

/// Creates the environment file from its template when missing and fails if it
/// still does not exist afterwards.
///
/// A failed copy is fatal: continuing would run compose against a missing
/// `--env-file`.
pub fn ensure_env_file(config: &StackConfig) -> Result<()> {
    match copy::copy_if_absent(&config.env_template, &config.env_file)? {
        Bootstrap::Copied => println!(
            "✅ Created {} from {}.",
            config.env_file.display(),
            config.env_template.display()
        ),
        Bootstrap::AlreadyPresent => debug!("Using {}", config.env_file.display()),
        Bootstrap::TemplateMissing => {}
    }

    if !config.env_file.is_file() {
        return Err(StackError::EnvFileMissing {
            path: config.env_file.clone(),
            template: config.env_template.clone(),
        }
        .into());
    }
    Ok(())
}

/// Validates, runs preflight, then routes to the subcommand handler.
pub async fn dispatch<R: ProcessRunner>(
    command: Commands,
    config: &StackConfig,
    runner: &R,
) -> Result<()> {
    command.validate()?;

    let stack = Stack::new(config, runner);
    stack.preflight().await?;
    info!("Preflight passed, running {:?}", command);

    match command {
        Commands::Up(args) => up::handle_up(args, &stack).await,
        Commands::Down(args) => down::handle_down(args, &stack).await,
        Commands::Nuke(args) => nuke::handle_nuke(args, &stack).await,
        Commands::Logs(args) => logs::handle_logs(args, &stack).await,
        Commands::Exec(args) => exec::handle_exec(args, &stack).await,
        Commands::Studio(args) => studio::handle_studio(args, &stack).await,
        Commands::Ps(args) => ps::handle_ps(args, &stack).await,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::config::StackConfig;
    use std::fs;
    use tempfile::TempDir;

    /// A project directory with an existing `.env`.
    pub fn project_with_env() -> (TempDir, StackConfig) {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".env"), "APP_PORT=3000\n").unwrap();
        let cfg = StackConfig::for_project(temp.path());
        (temp, cfg)
    }

    /// The compose prefix for `cfg`, as a list of owned tokens.
    pub fn prefix(cfg: &StackConfig) -> Vec<String> {
        vec![
            "compose".to_string(),
            "--env-file".to_string(),
            cfg.env_file.to_string_lossy().into_owned(),
            "-f".to_string(),
            cfg.compose_file.to_string_lossy().into_owned(),
        ]
    }
}
