//! # devstack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem operations devstack performs on its own behalf. The tool treats the
//! compose definition and environment file as opaque artifacts; the only write it
//! ever makes is the one-time copy of the environment template.
//!
//! - **`copy`**: `copy_if_absent`, the idempotent environment-file bootstrap.
//!
//! ```rust
//! use crate::common::fs::copy::{self, Bootstrap};
//! ```
//!

/// Idempotent template-to-target copy used to bootstrap `.env`.
pub mod copy;
