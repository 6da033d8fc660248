//! In-memory storage backend
//!
//! A nested hash map from n-gram hash to identifier to association counter.
//! Volatile and not internally synchronized: callers that share it across
//! threads must serialize access themselves (see [`crate::SharedIndex`]).

use ahash::AHashMap;

use crate::storage::error::StoreResult;
use crate::storage::traits::{NGramStore, SharedCounts};
use crate::token::{NGramHash, TokenId};

/// In-memory posting store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    postings: AHashMap<NGramHash, AHashMap<TokenId, u32>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            postings: AHashMap::new(),
        }
    }

    /// Number of distinct hashes with at least one association.
    pub fn hash_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of distinct (hash, identifier) pairs.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(|ids| ids.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl NGramStore for MemoryStore {
    fn increment(&mut self, hashes: &[NGramHash], id: TokenId) -> StoreResult<()> {
        for &hash in hashes {
            let counter = self
                .postings
                .entry(hash)
                .or_default()
                .entry(id)
                .or_insert(0);
            *counter = counter.saturating_add(1);
        }
        Ok(())
    }

    fn count_shared(&self, hashes: &[NGramHash]) -> StoreResult<SharedCounts> {
        let mut counts = SharedCounts::default();
        for hash in hashes {
            if let Some(ids) = self.postings.get(hash) {
                for id in ids.keys() {
                    *counts.entry(*id).or_insert(0) += 1;
                }
            }
        }
        Ok(counts)
    }

    fn association_count(&self, hash: NGramHash, id: TokenId) -> StoreResult<Option<u32>> {
        Ok(self
            .postings
            .get(&hash)
            .and_then(|ids| ids.get(&id))
            .copied())
    }
}
