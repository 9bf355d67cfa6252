//! # devstack Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout devstack. Every failure
//! the dispatcher can surface falls into one of three groups:
//!
//! - **Environment errors**: the orchestration tool is missing, its `compose`
//!   subsystem does not respond, or the environment file is missing and cannot be
//!   bootstrapped from its template.
//! - **Usage errors**: the operator supplied incomplete arguments (e.g. `exec`
//!   without a command).
//! - **External command failures**: `docker compose` exited with a nonzero status
//!   for a state-changing command.
//!
//! ## Architecture
//!
//! - `StackError`: A `thiserror` enum carrying the specific failure.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so handlers can attach
//!   context with `anyhow::Context` while `main` can still downcast to
//!   `StackError` to pick the process exit code.
//!
//! ## Examples
//!
//! ```rust
//! if command.is_empty() {
//!     return Err(StackError::Usage("exec needs a command".into()).into());
//! }
//!
//! match result {
//!     Err(e) if e.downcast_ref::<StackError>().is_some_and(StackError::is_usage) => { /* ... */ }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for devstack.
#[derive(Error, Debug)]
pub enum StackError {
    #[error("'{program}' is not installed or is not on PATH.")]
    ToolMissing { program: String },

    #[error("'{program} compose' is not available. Update Docker/Compose.")]
    ComposeUnavailable { program: String },

    #[error(
        "Missing {}. Create one from {} (cp {} {}).",
        .path.display(),
        .template.display(),
        .template.display(),
        .path.display()
    )]
    EnvFileMissing { path: PathBuf, template: PathBuf },

    #[error("Could not create {} from {}: {reason}", .target.display(), .template.display())]
    Bootstrap {
        template: PathBuf,
        target: PathBuf,
        reason: String,
    },

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("External command failed: {cmd} (status: {})", display_code(.code))]
    ExternalCommand { cmd: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StackError {
    /// Process exit code `main` should use when this error ends the run.
    ///
    /// Usage errors exit with `2`, matching clap's own argument errors. A failed
    /// external command propagates the child's exit code when it has one.
    pub fn exit_code(&self) -> i32 {
        match self {
            StackError::Usage(_) => 2,
            StackError::ExternalCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, StackError::Usage(_))
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
