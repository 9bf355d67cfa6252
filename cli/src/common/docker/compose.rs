//! # devstack Compose Command Builder
//!
//! File: cli/src/common/docker/compose.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds `docker compose` invocations as discrete argument vectors. Every
//! command shares the same prefix, always in this order:
//!
//! ```text
//! <program> compose --env-file <ENV_FILE> -f <COMPOSE_FILE> <subcommand> [flags...] [positionals...]
//! ```
//!
//! Callers append flags and positionals in a fixed order; nothing here depends on
//! input ordering, and nothing is ever routed through a shell.
//!
//! ```rust
//! let invocation = ComposeCommand::new(&cfg, "down")
//!     .flag_if(remove_volumes, "-v")
//!     .flag("--remove-orphans")
//!     .build();
//! ```
//!
use crate::common::process::Invocation;
use crate::core::config::StackConfig;

/// Fluent builder for a single `docker compose` invocation.
#[derive(Debug, Clone)]
pub struct ComposeCommand<'a> {
    config: &'a StackConfig,
    args: Vec<String>,
}

impl<'a> ComposeCommand<'a> {
    /// Starts a command with the compose prefix followed by `subcommand`.
    pub fn new(config: &'a StackConfig, subcommand: &str) -> Self {
        let args = vec![
            "compose".to_string(),
            "--env-file".to_string(),
            config.env_file.to_string_lossy().into_owned(),
            "-f".to_string(),
            config.compose_file.to_string_lossy().into_owned(),
            subcommand.to_string(),
        ];
        Self { config, args }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.args.push(flag.to_string());
        self
    }

    pub fn flag_if(self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.flag(flag)
        } else {
            self
        }
    }

    /// Appends `name` and `value` as two separate tokens.
    pub fn option(mut self, name: &str, value: impl ToString) -> Self {
        self.args.push(name.to_string());
        self.args.push(value.to_string());
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn arg_opt(self, arg: Option<&str>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    /// Appends operator-supplied tokens verbatim.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string()));
        self
    }

    /// Finishes the command, running in the project directory.
    pub fn build(self) -> Invocation {
        Invocation::new(&self.config.program, self.args, &self.config.project_dir)
    }
}
