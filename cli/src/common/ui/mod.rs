//! # devstack UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Operator-facing output. Every step devstack runs is announced with a banner
//! and the exact argument vector it is about to execute:
//!
//! ```text
//! === Start stack ===
//! $ docker compose --env-file /srv/app/.env -f /srv/app/docker-compose.yml up -d
//! ```
//!
//! The formatting functions return `String`s so they can be tested; the `print_*`
//! wrappers write them to stdout.
//!
use crate::common::process::Invocation;
use crate::core::config::Endpoint;

pub fn step_banner(title: &str) -> String {
    format!("\n=== {} ===", title)
}

pub fn command_echo(invocation: &Invocation) -> String {
    format!("$ {}", invocation.command_line())
}

/// Renders the endpoint list printed after `up`, aligning the URLs.
pub fn endpoint_list(endpoints: &[Endpoint]) -> String {
    let width = endpoints
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::from("\nEndpoints:");
    for endpoint in endpoints {
        out.push_str(&format!(
            "\n - {:<width$}  {}",
            format!("{}:", endpoint.label),
            endpoint.url,
            width = width + 1
        ));
    }
    out
}

pub fn print_step(title: &str, invocation: &Invocation) {
    println!("{}", step_banner(title));
    println!("{}", command_echo(invocation));
}

pub fn print_endpoints(endpoints: &[Endpoint]) {
    if !endpoints.is_empty() {
        println!("{}", endpoint_list(endpoints));
    }
}
