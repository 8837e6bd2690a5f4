//! # memodash-tui
//!
//! Interactive terminal dashboard contrasting two compositions of the same
//! screen.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A "before" dashboard that drills full records through its children,
//!   rebuilds callbacks on every pass and never skips a render.
//! - An "after" dashboard whose children read a shared store, receive stable
//!   callbacks and only re-render when their own inputs change.
//! - Per-component render counters so the difference is visible live.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod app;
pub mod error;
pub mod event;
pub mod report;
pub mod terminal;
pub mod ui;
