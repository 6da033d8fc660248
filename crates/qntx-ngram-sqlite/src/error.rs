//! Error types for SQLite storage backend

use qntx_ngram::StoreError;
use thiserror::Error;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur during SQLite storage operations
#[derive(Debug, Error)]
pub enum SqliteError {
    /// Database connection, query or transaction error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Stored key or value has the wrong width
    #[error("Corrupt posting: {0}")]
    Corrupt(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert SqliteError to StoreError for the storage trait
impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Database(e) => StoreError::Backend(format!("SQLite: {}", e)),
            SqliteError::Migration(msg) => StoreError::Backend(format!("Migration: {}", msg)),
            SqliteError::Corrupt(msg) => StoreError::Corrupt(msg),
            SqliteError::Io(e) => StoreError::Backend(format!("IO: {}", e)),
        }
    }
}
