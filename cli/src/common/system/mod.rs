//! # devstack System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Host-level checks that must pass before devstack touches the stack. Right now
//! that is a single preflight: the orchestration binary has to be on `PATH` and
//! its `compose` subsystem has to answer `compose version`.
//!
//! Both checks are fatal. They run before the environment file is bootstrapped so
//! that a missing Docker installation is reported as such and not hidden behind a
//! freshly copied `.env`.
//!
use crate::common::process::{Invocation, OutputMode, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::{Result, StackError};
use tracing::{debug, info};

/// Verifies that `<program>` resolves on `PATH` and `<program> compose version`
/// exits successfully.
///
/// # Errors
///
/// - `StackError::ToolMissing` if the program cannot be found. Nothing is spawned.
/// - `StackError::ComposeUnavailable` if the version probe cannot be started or
///   exits nonzero.
pub async fn ensure_tools<R: ProcessRunner>(runner: &R, config: &StackConfig) -> Result<()> {
    let program = config.program.as_str();
    let Some(path) = runner.resolve(program) else {
        return Err(StackError::ToolMissing {
            program: program.to_string(),
        }
        .into());
    };
    debug!("Found '{}' at {}", program, path.display());

    let probe = Invocation::new(program, ["compose", "version"], &config.project_dir);
    match runner.run(&probe, OutputMode::Quiet).await {
        Ok(status) if status.success() => {
            info!("'{} compose' is available.", program);
            Ok(())
        }
        Ok(status) => {
            debug!("'{}' exited with {:?}", probe.command_line(), status.code());
            Err(StackError::ComposeUnavailable {
                program: program.to_string(),
            }
            .into())
        }
        Err(e) => {
            debug!("'{}' could not be started: {:?}", probe.command_line(), e);
            Err(StackError::ComposeUnavailable {
                program: program.to_string(),
            }
            .into())
        }
    }
}
