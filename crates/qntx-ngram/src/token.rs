//! Identifier and result types shared by every backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width in bytes of a [`TokenId`]
pub const TOKEN_ID_LEN: usize = 16;

/// 32-bit hash of a single padded n-gram
pub type NGramHash = u32;

/// Caller-supplied identifier of an indexed string.
///
/// The index treats it as opaque bytes: it never allocates, validates or frees
/// identifiers, and uniqueness is up to the caller. Sixteen bytes fits a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId([u8; TOKEN_ID_LEN]);

impl TokenId {
    /// Wrap raw identifier bytes
    pub const fn from_bytes(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an identifier from a slice, which must be exactly [`TOKEN_ID_LEN`] bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; TOKEN_ID_LEN]>::try_from(bytes).ok().map(Self)
    }

    /// Raw identifier bytes
    pub const fn as_bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }

    /// Identifier as a big-endian integer
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }
}

impl From<u128> for TokenId {
    fn from(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<[u8; TOKEN_ID_LEN]> for TokenId {
    fn from(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A matched identifier and its similarity to the query, in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub token_id: TokenId,
    pub similarity: f64,
}

impl SearchResult {
    pub fn new(token_id: TokenId, similarity: f64) -> Self {
        Self {
            token_id,
            similarity,
        }
    }
}
