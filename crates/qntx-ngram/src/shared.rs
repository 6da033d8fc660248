//! Lock-wrapped index handle for multi-threaded callers

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::Result;
use crate::index::NGramIndex;
use crate::storage::NGramStore;
use crate::token::{SearchResult, TokenId};

/// Cloneable, thread-safe handle to an [`NGramIndex`].
///
/// Backends are not internally synchronized, so every call holds one mutex for
/// its whole duration. A `Mutex` rather than an `RwLock` keeps the handle
/// `Sync` for backends like SQLite connections that are `Send` but not `Sync`.
pub struct SharedIndex<S> {
    inner: Arc<Mutex<NGramIndex<S>>>,
}

impl<S> Clone for SharedIndex<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: NGramStore> SharedIndex<S> {
    pub fn new(index: NGramIndex<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    pub fn add(&self, text: &str, id: TokenId) -> Result<()> {
        self.inner.lock().add(text, id)
    }

    pub fn search(&self, text: &str, threshold: Option<f64>) -> Result<Vec<SearchResult>> {
        self.inner.lock().search(text, threshold)
    }

    pub fn best_match(&self, text: &str, threshold: Option<f64>) -> Result<SearchResult> {
        self.inner.lock().best_match(text, threshold)
    }

    /// Run `f` with exclusive access to the wrapped index
    pub fn with_index<R>(&self, f: impl FnOnce(&mut NGramIndex<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
