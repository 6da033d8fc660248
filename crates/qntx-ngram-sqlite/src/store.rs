//! SQLite storage backend implementing the NGramStore trait

use rusqlite::{Connection, TransactionBehavior};
use std::path::Path;
use tracing::debug;

use qntx_ngram::{NGramHash, NGramStore, SharedCounts, StoreResult, TokenId};

use crate::error::Result;
use crate::keys::{decode_counter, encode_counter, hash_prefix, posting_key, token_from_key};
use crate::kv;
use crate::options::SqliteOptions;

/// SQLite-backed posting store
///
/// Postings live in one ordered key-value table. Writes run in a single
/// `BEGIN IMMEDIATE` transaction per call, so concurrent writers on other
/// connections queue behind each other instead of losing increments.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store from a connection
    ///
    /// The connection should already have migrations applied.
    /// Use [`crate::migrate::migrate`] to initialize a fresh database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Open (or create) a file-backed store with default options
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, &SqliteOptions::default())
    }

    /// Open (or create) a file-backed store
    pub fn open_with_options(path: impl AsRef<Path>, options: &SqliteOptions) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        options.apply(&conn)?;
        crate::migrate::migrate(&conn)?;

        debug!(path = %path.display(), "opened ngram store");
        Ok(Self::new(conn))
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Number of stored (hash, token id) postings
    pub fn posting_count(&self) -> Result<u64> {
        kv::len(&self.conn)
    }

    fn increment_postings(&mut self, hashes: &[NGramHash], id: TokenId) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        for &hash in hashes {
            let key = posting_key(hash, id);
            let count = match kv::get(&tx, &key)? {
                Some(value) => decode_counter(&value)?.saturating_add(1),
                None => 1,
            };
            kv::set(&tx, &key, &encode_counter(count))?;
        }

        // dropping without commit rolls back every increment of this call
        tx.commit()?;
        Ok(())
    }

    fn count_postings(&self, hashes: &[NGramHash]) -> Result<SharedCounts> {
        // one read transaction so every scan sees the same snapshot
        let tx = self.conn.unchecked_transaction()?;

        let mut counts = SharedCounts::default();
        for &hash in hashes {
            kv::scan_prefix(&tx, &hash_prefix(hash), |key, _| {
                let id = token_from_key(key)?;
                *counts.entry(id).or_insert(0) += 1;
                Ok(())
            })?;
        }

        tx.commit()?;
        Ok(counts)
    }

    fn read_counter(&self, hash: NGramHash, id: TokenId) -> Result<Option<u32>> {
        kv::get(&self.conn, &posting_key(hash, id))?
            .map(|value| decode_counter(&value))
            .transpose()
    }
}

impl NGramStore for SqliteStore {
    fn increment(&mut self, hashes: &[NGramHash], id: TokenId) -> StoreResult<()> {
        Ok(self.increment_postings(hashes, id)?)
    }

    fn count_shared(&self, hashes: &[NGramHash]) -> StoreResult<SharedCounts> {
        Ok(self.count_postings(hashes)?)
    }

    fn association_count(&self, hash: NGramHash, id: TokenId) -> StoreResult<Option<u32>> {
        Ok(self.read_counter(hash, id)?)
    }
}
