//! Storage abstraction for n-gram postings
//!
//! This module defines the `NGramStore` trait that abstracts over posting
//! backends. Implementations exist for:
//!
//! - **Memory**: volatile hash map, single process (`MemoryStore`)
//! - **SQLite**: durable ordered key-value table (separate crate, `qntx-ngram-sqlite`)
//!
//! # Example
//!
//! ```rust
//! use qntx_ngram::storage::{MemoryStore, NGramStore};
//! use qntx_ngram::TokenId;
//!
//! let mut store = MemoryStore::new();
//! let id = TokenId::from(1u128);
//!
//! store.increment(&[10, 20, 20], id).unwrap();
//! let counts = store.count_shared(&[20, 30]).unwrap();
//! assert_eq!(counts.get(&id), Some(&1));
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{NGramStore, SharedCounts};
