//! # devstack Ps Handler
//!
//! File: cli/src/commands/ps.rs
//! Author: Christi Mahu
//!
//! `devstack ps` prints the status table for every service, including stopped ones.
//! The same invocation is reused by `up` after the stack starts.
//!
use super::{OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Show service status")]
pub struct PsArgs {}

/// Builds `compose ps -a`.
pub fn ps_invocation(config: &StackConfig) -> Invocation {
    ComposeCommand::new(config, "ps").flag("-a").build()
}

pub async fn handle_ps<R: ProcessRunner>(_args: PsArgs, stack: &Stack<'_, R>) -> Result<()> {
    let invocation = ps_invocation(stack.config);
    stack
        .run_step("Service status", &invocation, OnFailure::Abort)
        .await?;
    Ok(())
}
