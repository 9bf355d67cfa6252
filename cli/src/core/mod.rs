//! # devstack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by every command:
//! - `config`: Project root discovery, `.devstack.toml` loading and path resolution
//!   into a `StackConfig`.
//! - `error`: The `StackError` taxonomy and the crate-wide `Result` alias.
//!
//! ```rust
//! use crate::core::config::{self, StackConfig};
//! use crate::core::error::{Result, StackError};
//! ```
//!
pub mod config;
pub mod error;
