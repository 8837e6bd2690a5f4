//! Error type for the terminal front end.

use memodash_common::error::MemodashError;
use thiserror::Error;

/// Failures while driving the terminal dashboard.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Reading events from or drawing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A dashboard operation failed.
    #[error(transparent)]
    Dashboard(#[from] MemodashError),
}

/// Convenience alias for terminal operations.
pub type Result<T> = std::result::Result<T, TuiError>;
