//! # devstack Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! devstack starts, stops and inspects a local development stack (API service,
//! database and an optional database admin UI) by driving `docker compose`.
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the stack configuration once and handing it to the dispatcher
//! - Mapping errors to process exit codes
//!
//! ## Examples
//!
//! ```bash
//! devstack up --build
//! devstack logs --service api -f
//! devstack exec api sh -lc 'node -v'
//! devstack down --volumes
//! devstack -vv --project-dir ~/code/shop ps
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap (usage errors exit with 2)
//! 2. Configure logging based on verbosity level
//! 3. Resolve the project directory and load `StackConfig`
//! 4. Dispatch: validate, preflight, bootstrap `.env`, run compose
//! 5. Print any error and exit with its code
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // One module per subcommand plus the dispatcher.
mod common; // Process, filesystem, compose and UI utilities.
mod core; // Errors and configuration.

use crate::common::process::SystemRunner;
use crate::core::error::StackError;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "devstack",
    about = "Manage the local docker compose development stack (api + db + studio)",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding docker-compose.yml and .env. Defaults to the nearest
    /// ancestor of the current directory that has one.
    #[arg(long, global = true, env = "DEVSTACK_PROJECT_DIR")]
    project_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match crate::core::config::load_config(cli.project_dir.as_deref()) {
        Ok(config) => commands::dispatch(cli.command, &config, &SystemRunner).await,
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        let stack_error = e.downcast_ref::<StackError>();
        if stack_error.is_some_and(StackError::is_usage) {
            eprintln!("Run 'devstack --help' for usage.");
        }
        std::process::exit(stack_error.map_or(1, StackError::exit_code));
    }

    Ok(())
}
