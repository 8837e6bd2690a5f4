//! Unified error types for the memodash workspace.
//!
//! Higher-level crates wrap [`MemodashError`] in their own error enums when
//! they add failure sources of their own (terminal I/O, for instance).

use std::path::PathBuf;

use thiserror::Error;

/// A store was read or written outside of its active scope.
///
/// Either the consumer was handed a detached handle (no provider above it),
/// or the scope that owned the store has already been dropped. This is a
/// wiring mistake in the caller and is never recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no active store: `{operation}` called outside a store scope")]
pub struct ScopeError {
    /// Store operation that was attempted.
    pub operation: &'static str,
}

impl ScopeError {
    /// Creates a scope error for the given store operation.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MemodashError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The shared store was accessed outside its scope.
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, MemodashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_error_mentions_missing_store() {
        let err = ScopeError::new("stats");
        assert_eq!(
            err.to_string(),
            "no active store: `stats` called outside a store scope"
        );
    }

    #[test]
    fn scope_error_converts_transparently() {
        let err: MemodashError = ScopeError::new("set_user").into();
        assert!(matches!(err, MemodashError::Scope(ScopeError { operation: "set_user" })));
        assert!(err.to_string().starts_with("no active store"));
    }
}
