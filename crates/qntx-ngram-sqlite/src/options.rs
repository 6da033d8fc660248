//! Connection tuning applied when a store is opened

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// SQLite journal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    Wal,
    Delete,
    Truncate,
    Memory,
}

impl JournalMode {
    fn as_str(self) -> &'static str {
        match self {
            JournalMode::Wal => "WAL",
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Memory => "MEMORY",
        }
    }
}

/// SQLite `synchronous` level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Synchronous {
    Off,
    Normal,
    Full,
}

impl Synchronous {
    fn as_str(self) -> &'static str {
        match self {
            Synchronous::Off => "OFF",
            Synchronous::Normal => "NORMAL",
            Synchronous::Full => "FULL",
        }
    }
}

/// Options for file-backed stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqliteOptions {
    pub journal_mode: JournalMode,
    pub synchronous: Synchronous,
    /// How long a writer waits for another connection's lock before failing
    pub busy_timeout_ms: u64,
    /// Page cache size; `None` keeps SQLite's default
    pub cache_size_kib: Option<u32>,
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self {
            journal_mode: JournalMode::Wal,
            synchronous: Synchronous::Normal,
            busy_timeout_ms: 5_000,
            cache_size_kib: None,
        }
    }
}

impl SqliteOptions {
    pub fn journal_mode(mut self, mode: JournalMode) -> Self {
        self.journal_mode = mode;
        self
    }

    pub fn synchronous(mut self, level: Synchronous) -> Self {
        self.synchronous = level;
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn cache_size_kib(mut self, kib: u32) -> Self {
        self.cache_size_kib = Some(kib);
        self
    }

    /// Apply these options to an open connection
    pub fn apply(&self, conn: &Connection) -> Result<()> {
        conn.busy_timeout(Duration::from_millis(self.busy_timeout_ms))?;

        let mode: String = conn.pragma_update_and_check(
            None,
            "journal_mode",
            self.journal_mode.as_str(),
            |row| row.get(0),
        )?;
        conn.pragma_update(None, "synchronous", self.synchronous.as_str())?;
        if let Some(kib) = self.cache_size_kib {
            // negative cache_size is in KiB rather than pages
            conn.pragma_update(None, "cache_size", -i64::from(kib))?;
        }

        debug!(
            journal_mode = %mode,
            synchronous = self.synchronous.as_str(),
            busy_timeout_ms = self.busy_timeout_ms,
            "applied sqlite options"
        );
        Ok(())
    }
}
