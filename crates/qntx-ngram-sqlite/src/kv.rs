//! Ordered key-value primitives over the `ngram_postings` table
//!
//! The posting store only needs point get/set and ordered prefix iteration.
//! Transactions come from the caller: pass a `Transaction` (it derefs to
//! `Connection`) to group several calls atomically.

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;

/// Read the value stored under `key`
pub fn get(conn: &Connection, key: &[u8]) -> Result<Option<Vec<u8>>> {
    let value = conn
        .prepare_cached("SELECT value FROM ngram_postings WHERE key = ?")?
        .query_row([key], |row| row.get::<_, Vec<u8>>(0))
        .optional()?;
    Ok(value)
}

/// Insert or overwrite the value stored under `key`
pub fn set(conn: &Connection, key: &[u8], value: &[u8]) -> Result<()> {
    conn.prepare_cached(
        "INSERT INTO ngram_postings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )?
    .execute(rusqlite::params![key, value])?;
    Ok(())
}

/// Visit every (key, value) pair whose key starts with `prefix`, in key order.
///
/// Run inside a transaction when several scans must see one snapshot.
pub fn scan_prefix<F>(conn: &Connection, prefix: &[u8], mut visit: F) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> Result<()>,
{
    let mut stmt;
    let mut rows = match prefix_upper_bound(prefix) {
        Some(upper) => {
            stmt = conn.prepare_cached(
                "SELECT key, value FROM ngram_postings WHERE key >= ?1 AND key < ?2 ORDER BY key",
            )?;
            stmt.query(rusqlite::params![prefix, upper])?
        }
        None => {
            stmt = conn.prepare_cached(
                "SELECT key, value FROM ngram_postings WHERE key >= ?1 ORDER BY key",
            )?;
            stmt.query([prefix])?
        }
    };

    while let Some(row) = rows.next()? {
        let key: Vec<u8> = row.get(0)?;
        let value: Vec<u8> = row.get(1)?;
        visit(&key, &value)?;
    }
    Ok(())
}

/// Number of stored pairs
pub fn len(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM ngram_postings", [], |row| {
        row.get(0)
    })?;
    Ok(count as u64)
}

/// Smallest byte string greater than every string starting with `prefix`,
/// or `None` when the prefix is empty or all `0xff`.
fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut upper = prefix.to_vec();
    while let Some(last) = upper.pop() {
        if last < u8::MAX {
            upper.push(last + 1);
            return Some(upper);
        }
    }
    None
}
