//! QNTX N-gram Index
//!
//! Approximate string lookup over character n-grams ("shingles"). Strings are
//! registered under caller identifiers and later found again by the share of
//! the query's n-grams they contain, which tolerates typos and partial input.
//!
//! # Components
//!
//! - [`tokenize`] - padded sliding-window n-gram hashing (MurmurHash3)
//! - [`storage`] - the `NGramStore` posting trait and the in-memory backend
//! - [`NGramIndex`] - add / search / best match with optional score warping
//! - [`SharedIndex`] - mutex-wrapped handle for multi-threaded callers
//!
//! A durable SQLite backend lives in the `qntx-ngram-sqlite` crate.
//!
//! # Example
//!
//! ```rust
//! use qntx_ngram::{IndexConfig, MemoryStore, NGramIndex, TokenId};
//!
//! let config = IndexConfig::new().with_n(3).unwrap();
//! let mut index = NGramIndex::with_config(MemoryStore::new(), config).unwrap();
//!
//! index.add("hello", TokenId::from(1u128)).unwrap();
//! index.add("world", TokenId::from(2u128)).unwrap();
//!
//! let results = index.search("hello", Some(0.5)).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].similarity, 1.0);
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod shared;
pub mod storage;
pub mod token;
pub mod tokenize;

// Re-export main types at crate root
pub use config::IndexConfig;
pub use error::{IndexError, Result};
pub use index::NGramIndex;
pub use shared::SharedIndex;
pub use storage::{MemoryStore, NGramStore, SharedCounts, StoreError, StoreResult};
pub use token::{NGramHash, SearchResult, TokenId, TOKEN_ID_LEN};
pub use tokenize::{tokenize, Tokenizer};
