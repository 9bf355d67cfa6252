//! # devstack Studio Handler
//!
//! File: cli/src/commands/studio.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `devstack studio` starts only the database admin UI service (`studio` unless
//! `[services] studio` says otherwise) and prints its URL.
//!
use super::{OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Start the database admin UI")]
pub struct StudioArgs {}

/// Builds `compose up -d <studio service>`.
pub fn studio_invocation(config: &StackConfig) -> Invocation {
    ComposeCommand::new(config, "up")
        .flag("-d")
        .arg(&config.studio_service)
        .build()
}

pub async fn handle_studio<R: ProcessRunner>(
    _args: StudioArgs,
    stack: &Stack<'_, R>,
) -> Result<()> {
    let invocation = studio_invocation(stack.config);
    stack
        .run_step("Start studio", &invocation, OnFailure::Abort)
        .await?;
    println!("✅ Studio: {}", stack.config.studio_url);
    Ok(())
}
