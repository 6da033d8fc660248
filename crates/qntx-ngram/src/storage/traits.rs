//! Storage trait definitions

use ahash::AHashMap;

use crate::storage::error::StoreResult;
use crate::token::{NGramHash, TokenId};

/// Per-identifier count of query hashes it shares with the query
pub type SharedCounts = AHashMap<TokenId, usize>;

/// Inverted index from n-gram hash to the identifiers containing it.
///
/// Every (hash, identifier) pair carries an association counter that only
/// grows. Readers count presence per query hash, never the counter's magnitude.
pub trait NGramStore {
    /// Create or increment the counter of `(hash, id)` for every hash in `hashes`.
    ///
    /// Repeated hashes increment repeatedly. The call is all-or-nothing: on
    /// error no association from this call may persist.
    fn increment(&mut self, hashes: &[NGramHash], id: TokenId) -> StoreResult<()>;

    /// For each hash in `hashes`, add one to the count of every identifier
    /// associated with it.
    ///
    /// A hash repeated in `hashes` counts again. Enumeration order of the
    /// returned map is unspecified.
    fn count_shared(&self, hashes: &[NGramHash]) -> StoreResult<SharedCounts>;

    /// Current association counter of `(hash, id)`, `None` if never associated.
    fn association_count(&self, hash: NGramHash, id: TokenId) -> StoreResult<Option<u32>>;
}

impl<S: NGramStore + ?Sized> NGramStore for Box<S> {
    fn increment(&mut self, hashes: &[NGramHash], id: TokenId) -> StoreResult<()> {
        (**self).increment(hashes, id)
    }

    fn count_shared(&self, hashes: &[NGramHash]) -> StoreResult<SharedCounts> {
        (**self).count_shared(hashes)
    }

    fn association_count(&self, hash: NGramHash, id: TokenId) -> StoreResult<Option<u32>> {
        (**self).association_count(hash, id)
    }
}
