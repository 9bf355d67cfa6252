//! # devstack Down Handler
//!
//! File: cli/src/commands/down.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devstack down`: stop the stack and remove its
//! containers and networks. Orphaned containers (left over from services that
//! were renamed or removed from the compose file) are always removed. Named
//! volumes, and therefore database data, are removed only with `--volumes`.
//!
//! ## Usage
//!
//! ```bash
//! # Keep data
//! devstack down
//!
//! # Drop data too
//! devstack down --volumes
//! ```
//!
use super::{OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

/// Arguments for `devstack down`.
#[derive(Parser, Debug)]
#[command(about = "Stop the stack and remove its containers and networks")]
pub struct DownArgs {
    /// Also remove named volumes (passes `-v`).
    #[arg(long)]
    volumes: bool,
}

/// Builds `compose down [-v] --remove-orphans`.
pub fn down_invocation(args: &DownArgs, config: &StackConfig) -> Invocation {
    ComposeCommand::new(config, "down")
        .flag_if(args.volumes, "-v")
        .flag("--remove-orphans")
        .build()
}

/// Stops the stack. A nonzero exit from compose ends the run.
pub async fn handle_down<R: ProcessRunner>(args: DownArgs, stack: &Stack<'_, R>) -> Result<()> {
    debug!("Down args: {:?}", args);
    let invocation = down_invocation(&args, stack.config);
    stack
        .run_step("Stop stack", &invocation, OnFailure::Abort)
        .await?;

    if args.volumes {
        println!("✅ Stack stopped; volumes removed.");
    } else {
        println!("✅ Stack stopped.");
    }
    Ok(())
}
