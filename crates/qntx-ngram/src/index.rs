//! NGramIndex - similarity engine over a pluggable posting store

use tracing::trace;

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::storage::NGramStore;
use crate::token::{NGramHash, SearchResult, TokenId};
use crate::tokenize::Tokenizer;

/// Fuzzy string index.
///
/// Strings are registered under caller identifiers with [`NGramIndex::add`] and
/// looked up by n-gram overlap with [`NGramIndex::search`] or
/// [`NGramIndex::best_match`]. The backend is injected at construction.
///
/// ```rust
/// use qntx_ngram::{MemoryStore, NGramIndex, TokenId};
///
/// let mut index = NGramIndex::new(MemoryStore::new());
/// index.add("hello", TokenId::from(1u128)).unwrap();
/// index.add("world", TokenId::from(2u128)).unwrap();
///
/// let best = index.best_match("helo", None).unwrap();
/// assert_eq!(best.token_id, TokenId::from(1u128));
/// ```
#[derive(Debug)]
pub struct NGramIndex<S> {
    config: IndexConfig,
    tokenizer: Tokenizer,
    store: S,
}

impl<S: NGramStore> NGramIndex<S> {
    /// Create an index with the default configuration
    pub fn new(store: S) -> Self {
        Self {
            config: IndexConfig::default(),
            tokenizer: Tokenizer::default(),
            store,
        }
    }

    /// Create an index with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `n` or `warp` is out of range.
    pub fn with_config(store: S, config: IndexConfig) -> Result<Self> {
        config.validate()?;
        let config = config.normalized();
        Ok(Self {
            tokenizer: config.tokenizer()?,
            config,
            store,
        })
    }

    /// Register `text` under `id`.
    ///
    /// Adding the same text again under the same id is allowed and only bumps
    /// association counters.
    pub fn add(&mut self, text: &str, id: TokenId) -> Result<()> {
        let hashes = self.tokenizer.tokenize(text)?;
        trace!(grams = hashes.len(), token_id = %id, "adding string to ngram index");
        self.store.increment(&hashes, id)?;
        Ok(())
    }

    /// Find every indexed identifier whose similarity to `text` is at least
    /// `threshold` (default 0.0). Result order is unspecified.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `threshold` is outside `[0, 1]`
    /// - `InvalidInput` if `text` is empty
    /// - `Storage` if the backend fails
    pub fn search(&self, text: &str, threshold: Option<f64>) -> Result<Vec<SearchResult>> {
        let threshold = validate_threshold(threshold)?;
        self.match_candidates(text, threshold)
    }

    /// The single most similar identifier meeting `threshold`.
    ///
    /// Candidates tied on similarity are resolved by the backend's enumeration
    /// order, which is not deterministic.
    ///
    /// # Errors
    ///
    /// As [`NGramIndex::search`], plus `NotFound` when no candidate qualifies.
    pub fn best_match(&self, text: &str, threshold: Option<f64>) -> Result<SearchResult> {
        let threshold = validate_threshold(threshold)?;
        let candidates = self.match_candidates(text, threshold)?;

        let mut best: Option<SearchResult> = None;
        for candidate in candidates {
            match best {
                Some(current) if candidate.similarity <= current.similarity => {}
                _ => best = Some(candidate),
            }
        }
        best.ok_or(IndexError::NotFound)
    }

    /// Tokenize `text` with this index's pad and gram size
    pub fn tokenize(&self, text: &str) -> Result<Vec<NGramHash>> {
        self.tokenizer.tokenize(text)
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the backend back, e.g. to reopen it under another configuration
    pub fn into_store(self) -> S {
        self.store
    }

    fn match_candidates(&self, text: &str, threshold: f64) -> Result<Vec<SearchResult>> {
        let hashes = self.tokenizer.tokenize(text)?;
        let counts = self.store.count_shared(&hashes)?;
        let all = hashes.len() as f64;

        let results: Vec<SearchResult> = counts
            .into_iter()
            .filter_map(|(token_id, matched)| {
                let sim = similarity(all, matched as f64, self.config.warp);
                (sim >= threshold).then(|| SearchResult::new(token_id, sim))
            })
            .collect();

        trace!(
            grams = hashes.len(),
            matches = results.len(),
            threshold,
            "searched ngram index"
        );
        Ok(results)
    }
}

/// Overlap score of `matched` shared grams out of `all` query grams.
///
/// With `warp == 1.0` this is exactly `matched / all`; lower warps compress
/// differences between near-equal overlaps.
pub fn similarity(all: f64, matched: f64, warp: f64) -> f64 {
    if warp == 1.0 {
        return matched / all;
    }
    let all_warped = all.powf(warp);
    (all_warped - (all - matched).powf(warp)) / all_warped
}

fn validate_threshold(threshold: Option<f64>) -> Result<f64> {
    let threshold = threshold.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(IndexError::InvalidConfiguration(format!(
            "threshold must be in [0, 1], got {}",
            threshold
        )));
    }
    Ok(threshold)
}
