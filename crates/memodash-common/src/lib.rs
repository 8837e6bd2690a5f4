//! # memodash-common
//!
//! Shared data model, error definitions, configuration and constants
//! used across the memodash workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the records every dashboard variant renders.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
