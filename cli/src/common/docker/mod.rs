//! # devstack Docker Module Interface
//!
//! File: cli/src/common/docker/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! devstack talks to Docker only through the `docker compose` command line. This
//! module holds the pieces that know the shape of that command line:
//!
//! - **`compose`**: `ComposeCommand`, the argument-vector builder shared by every
//!   subcommand.
//!
//! Running the resulting `Invocation` is the job of `common::process`.
//!

/// Builder for `docker compose` argument vectors.
pub mod compose;

pub use compose::ComposeCommand;
