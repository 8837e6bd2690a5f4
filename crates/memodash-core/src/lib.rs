//! # memodash-core
//!
//! State-sharing and re-render control primitives for memodash.
//!
//! - [`StoreScope`](store::StoreScope) owns the dashboard records for the
//!   lifetime of one mounted dashboard and hands out non-owning
//!   [`StoreHandle`](store::StoreHandle)s to descendants.
//! - [`UpdateFunctions`](actions::UpdateFunctions) are bound once per scope
//!   and keep the same identity for as long as the scope lives.
//! - [`MemoCell`](memo::MemoCell) retains a derived value until its inputs
//!   change.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), mirroring the
//! event-driven model of the terminal UI that drives it.
//!
//! # Example
//!
//! ```rust
//! use memodash_core::store::StoreScope;
//!
//! let scope = StoreScope::seeded();
//! let store = scope.handle();
//! let actions = store.update_functions()?;
//!
//! let stats = *store.stats()?;
//! actions.update_stats.call(stats.with_more_users(10))?;
//! assert_eq!(store.stats()?.users, 1244);
//! # Ok::<(), memodash_common::error::ScopeError>(())
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod actions;
pub mod callback;
pub mod feed;
pub mod memo;
pub mod store;
