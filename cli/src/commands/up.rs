//! # devstack Up Handler
//!
//! File: cli/src/commands/up.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devstack up`, which starts every service declared in
//! the compose file in the background and then shows where things are running.
//!
//! ## Architecture
//!
//! 1. Run `docker compose ... up -d`, appending `--build` when the operator asks
//!    for images to be rebuilt. A nonzero exit ends the run with the child's code.
//! 2. Run `docker compose ... ps -a` to print the status table. A nonzero exit
//!    here also ends the run with the child's code.
//! 3. Print the configured endpoint URLs and a hint for starting studio.
//!
//! There is no readiness polling or health check: compose's own exit code is the
//! only success signal.
//!
//! ## Usage
//!
//! ```bash
//! devstack up
//! devstack up --build
//! ```
//!
use super::{ps, OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::common::ui;
use crate::core::config::StackConfig;
use crate::core::error::Result;
use clap::Parser;
use tracing::{debug, info};

/// Arguments for `devstack up`.
#[derive(Parser, Debug)]
#[command(about = "Start the stack (api + db) in the background")]
pub struct UpArgs {
    /// Rebuild images before starting containers.
    #[arg(long)]
    build: bool,
}

/// Builds `compose up -d [--build]`.
pub fn up_invocation(args: &UpArgs, config: &StackConfig) -> Invocation {
    ComposeCommand::new(config, "up")
        .flag("-d")
        .flag_if(args.build, "--build")
        .build()
}

/// # Handle Up Command (`handle_up`)
///
/// Starts the stack, prints the status table and lists the endpoints.
///
/// ## Returns
///
/// * `Err(StackError::ExternalCommand)` if `compose up` or `compose ps` exits nonzero.
pub async fn handle_up<R: ProcessRunner>(args: UpArgs, stack: &Stack<'_, R>) -> Result<()> {
    debug!("Up args: {:?}", args);

    let up = up_invocation(&args, stack.config);
    stack
        .run_step("Start stack (API + database)", &up, OnFailure::Abort)
        .await?;
    info!("Stack is up.");

    let status = ps::ps_invocation(stack.config);
    stack
        .run_step("Service status", &status, OnFailure::Abort)
        .await?;

    ui::print_endpoints(&stack.config.endpoints);
    println!("\nStart the database admin UI with: devstack studio");
    Ok(())
}
