//! # devstack Logs Handler
//!
//! File: cli/src/commands/logs.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devstack logs`, a pass-through to `docker compose logs`
//! for one service or the whole stack.
//!
//! ## Architecture
//!
//! The invocation is `compose logs --tail N [-f] [SERVICE]`. Output is streamed
//! straight to the operator's terminal. With `--follow` the child keeps running
//! until the operator interrupts it; the interrupt reaches devstack and the child
//! together since they share the terminal's process group.
//!
//! A nonzero exit (unknown service, stack not running, interrupted follow) is
//! reported but does not make devstack itself fail.
//!
//! ## Usage
//!
//! ```bash
//! devstack logs
//! devstack logs --service api -f
//! devstack logs --service studio --tail 50
//! ```
//!
use super::{OnFailure, Stack};
use crate::common::docker::ComposeCommand;
use crate::common::process::{Invocation, ProcessRunner};
use crate::core::config::StackConfig;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

/// Arguments for `devstack logs`.
#[derive(Parser, Debug)]
#[command(about = "Show service logs")]
pub struct LogsArgs {
    /// Service to show (api, db, studio). Defaults to all services.
    #[arg(long)]
    service: Option<String>,

    /// Number of lines to show from the end of each log.
    #[arg(long, default_value_t = 200)]
    tail: u32,

    /// Keep streaming new log output.
    #[arg(short, long)]
    follow: bool,
}

/// Builds `compose logs --tail N [-f] [SERVICE]`.
pub fn logs_invocation(args: &LogsArgs, config: &StackConfig) -> Invocation {
    ComposeCommand::new(config, "logs")
        .option("--tail", args.tail)
        .flag_if(args.follow, "-f")
        .arg_opt(args.service.as_deref())
        .build()
}

/// Streams logs. A nonzero exit is reported only.
pub async fn handle_logs<R: ProcessRunner>(args: LogsArgs, stack: &Stack<'_, R>) -> Result<()> {
    debug!("Logs args: {:?}", args);
    let invocation = logs_invocation(&args, stack.config);
    stack
        .run_step("Logs", &invocation, OnFailure::Report)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{prefix, project_with_env};

    #[test]
    fn test_logs_args_defaults() {
        let args = LogsArgs::try_parse_from(["logs"]).unwrap();
        assert!(args.service.is_none());
        assert_eq!(args.tail, 200);
        assert!(!args.follow);
    }

    #[test]
    fn test_logs_service_and_tail_order() {
        let (_temp, cfg) = project_with_env();
        let args =
            LogsArgs::try_parse_from(["logs", "--service", "studio", "--tail", "50"]).unwrap();

        let invocation = logs_invocation(&args, &cfg);
        let mut expected = prefix(&cfg);
        expected.extend(["logs", "--tail", "50", "studio"].map(String::from));
        assert_eq!(invocation.args, expected);
    }

    #[test]
    fn test_logs_follow_all_services() {
        let (_temp, cfg) = project_with_env();
        let args = LogsArgs::try_parse_from(["logs", "-f"]).unwrap();

        let invocation = logs_invocation(&args, &cfg);
        assert_eq!(&invocation.args[5..], ["logs", "--tail", "200", "-f"]);
    }

    #[test]
    fn test_logs_rejects_bad_tail() {
        assert!(LogsArgs::try_parse_from(["logs", "--tail", "many"]).is_err());
    }
}
