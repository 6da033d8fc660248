//! Storage error types

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Storage backend error (database, filesystem, transaction)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Persisted key or value does not match the expected layout
    #[error("corrupt posting: {0}")]
    Corrupt(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
