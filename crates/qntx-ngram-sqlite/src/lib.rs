//! SQLite storage backend for the QNTX n-gram index
//!
//! This crate provides a durable implementation of the qntx-ngram `NGramStore`
//! trait. SQLite is used as an ordered key-value store: one `WITHOUT ROWID`
//! table keyed by `hash || token id`, so the postings of a hash are found with
//! a prefix scan.
//!
//! # Features
//!
//! - Implements `NGramStore`; drop-in replacement for `MemoryStore`
//! - Each add is one immediate transaction (all-or-nothing, no lost updates)
//! - Each search reads from one snapshot
//! - Supports in-memory databases for testing
//!
//! # Example
//!
//! ```rust,no_run
//! use qntx_ngram::{NGramIndex, TokenId};
//! use qntx_ngram_sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::open("/tmp/ngram.db")?;
//! let mut index = NGramIndex::new(store);
//!
//! index.add("hello", TokenId::from(1u128))?;
//! let best = index.best_match("helo", None)?;
//! assert_eq!(best.token_id, TokenId::from(1u128));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod keys;
pub mod kv;
pub mod migrate;
pub mod options;
pub mod store;

// Re-export main types
pub use error::{Result, SqliteError};
pub use options::{JournalMode, SqliteOptions, Synchronous};
pub use store::SqliteStore;
