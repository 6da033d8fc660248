//! Shingle tokenizer
//!
//! Splits a string into the ordered sequence of 32-bit hashes of its n-grams.
//! The input is padded with one pad character on each side and walked one code
//! point at a time. Every full window of `n` code points is hashed, then the
//! tail of the padded string is hashed again in shrinking suffixes so the
//! trailing boundary is represented.
//!
//! ```rust
//! use qntx_ngram::tokenize::{murmur3_32, tokenize};
//!
//! let grams = tokenize("hello", '$', 3).unwrap();
//! let expected: Vec<u32> = ["$he", "hel", "ell", "llo", "lo$"]
//!     .iter()
//!     .map(|g| murmur3_32(g.as_bytes(), 0))
//!     .collect();
//! assert_eq!(grams, expected);
//! ```

mod murmur;
mod ring;

pub use murmur::murmur3_32;

use crate::error::{IndexError, Result};
use crate::token::NGramHash;
use ring::OffsetRing;

/// Largest supported gram size, and the capacity of the offset ring
pub const MAX_N: usize = 8;
/// Smallest supported gram size
pub const MIN_N: usize = 2;
/// Gram size used when none is configured
pub const DEFAULT_N: usize = 3;
/// Pad character used when none is configured
pub const DEFAULT_PAD: char = '$';

const HASH_SEED: u32 = 0;

#[inline]
fn hash_gram(gram: &str) -> NGramHash {
    murmur3_32(gram.as_bytes(), HASH_SEED)
}

/// Check that `n` is a supported gram size
pub fn validate_n(n: usize) -> Result<()> {
    if !(MIN_N..=MAX_N).contains(&n) {
        return Err(IndexError::InvalidConfiguration(format!(
            "n must be in [{}, {}], got {}",
            MIN_N, MAX_N, n
        )));
    }
    Ok(())
}

/// Tokenize `text` into n-gram hashes.
///
/// Deterministic: the same text, pad and `n` always give the same sequence.
///
/// # Errors
///
/// - `InvalidInput` if `text` is empty
/// - `InvalidConfiguration` if `n` is outside `[MIN_N, MAX_N]`
pub fn tokenize(text: &str, pad: char, n: usize) -> Result<Vec<NGramHash>> {
    if text.is_empty() {
        return Err(IndexError::InvalidInput("empty string".to_string()));
    }
    validate_n(n)?;

    let mut input = String::with_capacity(text.len() + 2 * pad.len_utf8());
    input.push(pad);
    input.push_str(text);
    input.push(pad);

    let mut ring = OffsetRing::new();
    let mut hashes = Vec::with_capacity(input.len());
    let mut position = 0;

    for (offset, _) in input.char_indices() {
        position += 1;
        if position > n {
            // window covers code points position-n ..= position-1
            let start = ring.offset_of(position - n);
            hashes.push(hash_gram(&input[start..offset]));
        }
        ring.record(position, offset);
    }

    // `position` is now the code point count of the padded input
    for i in (MIN_N..n).rev() {
        if position >= i {
            let start = ring.offset_of(position - i);
            hashes.push(hash_gram(&input[start..]));
        }
    }

    Ok(hashes)
}

/// Tokenizer bound to a pad character and gram size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tokenizer {
    pad: char,
    n: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD,
            n: DEFAULT_N,
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer, rejecting unsupported gram sizes
    pub fn new(pad: char, n: usize) -> Result<Self> {
        validate_n(n)?;
        Ok(Self { pad, n })
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Tokenize `text` with this tokenizer's settings
    pub fn tokenize(&self, text: &str) -> Result<Vec<NGramHash>> {
        tokenize(text, self.pad, self.n)
    }
}
