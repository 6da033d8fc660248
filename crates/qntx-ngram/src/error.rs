//! Error types for index operations

use thiserror::Error;

use crate::storage::StoreError;

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors returned by the tokenizer and the similarity engine
#[derive(Debug, Clone, Error)]
pub enum IndexError {
    /// Input text rejected before tokenization (e.g. empty string)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Gram size, warp or threshold outside the accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No candidate met the threshold
    #[error("no matches found")]
    NotFound,

    /// Failure surfaced by the storage backend, passed through unchanged
    #[error(transparent)]
    Storage(#[from] StoreError),
}
