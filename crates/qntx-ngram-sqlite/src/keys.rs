//! Byte layout of posting keys and values
//!
//! key   = hash (4 bytes, little-endian) || token id (16 bytes)
//! value = association counter (4 bytes, little-endian)
//!
//! Every key starts with its hash, so the postings of one hash form a
//! contiguous run in key order.

use qntx_ngram::{NGramHash, TokenId, TOKEN_ID_LEN};

use crate::error::{Result, SqliteError};

pub const HASH_LEN: usize = 4;
pub const KEY_LEN: usize = HASH_LEN + TOKEN_ID_LEN;
pub const COUNTER_LEN: usize = 4;

pub fn hash_prefix(hash: NGramHash) -> [u8; HASH_LEN] {
    hash.to_le_bytes()
}

pub fn posting_key(hash: NGramHash, id: TokenId) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    key[..HASH_LEN].copy_from_slice(&hash_prefix(hash));
    key[HASH_LEN..].copy_from_slice(id.as_bytes());
    key
}

pub fn token_from_key(key: &[u8]) -> Result<TokenId> {
    if key.len() != KEY_LEN {
        return Err(SqliteError::Corrupt(format!(
            "posting key is {} bytes, expected {}",
            key.len(),
            KEY_LEN
        )));
    }
    TokenId::from_slice(&key[HASH_LEN..])
        .ok_or_else(|| SqliteError::Corrupt("posting key has no token id".to_string()))
}

pub fn encode_counter(count: u32) -> [u8; COUNTER_LEN] {
    count.to_le_bytes()
}

pub fn decode_counter(value: &[u8]) -> Result<u32> {
    let bytes: [u8; COUNTER_LEN] = value.try_into().map_err(|_| {
        SqliteError::Corrupt(format!(
            "counter is {} bytes, expected {}",
            value.len(),
            COUNTER_LEN
        ))
    })?;
    Ok(u32::from_le_bytes(bytes))
}
