//! # devstack Exec Handler
//!
//! File: cli/src/commands/exec.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devstack exec`, which runs an arbitrary command inside
//! a running service container via `docker compose exec`.
//!
//! ## Architecture
//!
//! 1. Parse `SERVICE` and everything after it as the command. Once the service is
//!    given, every following token (including ones starting with `-`) belongs to
//!    the command, so `devstack exec api sh -lc 'node -v'` needs no `--`.
//! 2. Reject an empty command with a usage error before any preflight runs.
//! 3. Build `compose exec SERVICE COMMAND...`. The command tokens are forwarded
//!    verbatim as separate arguments; nothing passes through a shell on the host.
//! 4. Run it with the operator's terminal attached. A nonzero exit from the
//!    command inside the container is reported, not escalated.
//!
//! ## Usage
//!
//! ```bash
//! devstack exec api node -v
//! devstack exec api sh -lc 'ls -la'
//! devstack exec db psql -U app -d app
//! ```
//!
use super::{OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::{Result, StackError};
use clap::Parser;
use tracing::{debug, info};

/// # Exec Arguments (`ExecArgs`)
///
/// Defines the arguments accepted by `devstack exec`.
#[derive(Parser, Debug)]
#[command(
    about = "Run a command inside a service container",
    long_about = "Runs COMMAND inside the running container of SERVICE (api, db, studio) \
                  using `docker compose exec`."
)]
pub struct ExecArgs {
    /// Service whose container runs the command (api, db, studio).
    service: String,

    /// Command and arguments to run, e.g. `sh -lc 'node -v'`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

/// Rejects an empty command. Called by the dispatcher before preflight.
pub fn validate(args: &ExecArgs) -> Result<()> {
    if args.command.is_empty() {
        return Err(StackError::Usage(format!(
            "exec needs a command to run. Example: devstack exec {} sh -lc 'node -v'",
            args.service
        ))
        .into());
    }
    Ok(())
}

/// Builds `compose exec SERVICE COMMAND...`.
pub fn exec_invocation(args: &ExecArgs, config: &StackConfig) -> Invocation {
    ComposeCommand::new(config, "exec")
        .arg(&args.service)
        .args(&args.command)
        .build()
}

/// # Handle Exec Command (`handle_exec`)
///
/// Runs the operator's command in the service container.
///
/// ## Returns
///
/// * `Ok(())` once the command has finished, whatever its exit status.
/// * `Err(StackError::Usage)` if no command was given.
/// * `Err` if the compose process could not be started at all.
pub async fn handle_exec<R: ProcessRunner>(args: ExecArgs, stack: &Stack<'_, R>) -> Result<()> {
    debug!("Exec args: {:?}", args);
    validate(&args)?;

    let invocation = exec_invocation(&args, stack.config);
    let title = format!("Exec in {}", args.service);
    let status = stack
        .run_step(&title, &invocation, OnFailure::Report)
        .await?;
    info!(
        "Command {:?} in '{}' finished with {:?}",
        args.command,
        args.service,
        status.code()
    );
    Ok(())
}
