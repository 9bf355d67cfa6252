//! # devstack Nuke Handler
//!
//! File: cli/src/commands/nuke.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devstack nuke`, the full reset: stop the stack and
//! remove its volumes, orphaned containers and the images compose built locally.
//! With `--all-images` every image referenced by the compose file is removed,
//! including pulled ones such as the database image.
//!
//! ```bash
//! devstack nuke
//! devstack nuke --all-images
//! ```
//!
use super::{OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

/// Arguments for `devstack nuke`.
#[derive(Parser, Debug)]
#[command(about = "Stop the stack and remove volumes, orphans and locally built images")]
pub struct NukeArgs {
    /// Remove every image used by the stack, not only locally built ones (`--rmi all`).
    #[arg(long)]
    all_images: bool,
}

/// Builds `compose down -v --rmi local|all --remove-orphans`.
pub fn nuke_invocation(args: &NukeArgs, config: &StackConfig) -> Invocation {
    let images = if args.all_images { "all" } else { "local" };
    ComposeCommand::new(config, "down")
        .flag("-v")
        .option("--rmi", images)
        .flag("--remove-orphans")
        .build()
}

pub async fn handle_nuke<R: ProcessRunner>(args: NukeArgs, stack: &Stack<'_, R>) -> Result<()> {
    debug!("Nuke args: {:?}", args);
    let invocation = nuke_invocation(&args, stack.config);
    stack
        .run_step(
            "Full reset (volumes + images)",
            &invocation,
            OnFailure::Abort,
        )
        .await?;
    println!("✅ Stack removed together with its volumes and images.");
    Ok(())
}
