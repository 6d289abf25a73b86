//! Store error types.

use thiserror::Error;

/// Errors from endpoint store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem operation failed.
    #[error("Endpoint store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("Endpoint store lock poisoned")]
    LockPoisoned,
}
