//! # devstack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers. Keeping them under `common::`
//! separates the mechanics (spawning processes, copying files, printing) from the
//! per-command decisions in `commands::`.
//!
//! - **`docker`**: `ComposeCommand`, the `docker compose` argument-vector builder.
//! - **`fs`**: Idempotent bootstrap of the environment file from its template.
//! - **`process`**: The `ProcessRunner` capability and its `tokio::process` implementation.
//! - **`system`**: Preflight check that the orchestration tool and its compose subsystem are usable.
//! - **`ui`**: Step banners, command echo and the endpoint list.
//!

/// `docker compose` command construction.
pub mod docker;
/// Environment file bootstrap.
pub mod fs;
/// External process execution.
pub mod process;
/// Host tool availability checks.
pub mod system;
/// Terminal output helpers.
pub mod ui;
