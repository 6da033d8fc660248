//! Index configuration

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};
use crate::tokenize::{validate_n, Tokenizer, DEFAULT_N, DEFAULT_PAD};

/// Warp used when none is configured; plain matched/total ratio
pub const DEFAULT_WARP: f64 = 1.0;

/// Tokenizer and scoring settings for an [`crate::NGramIndex`].
///
/// Missing fields in a JSON document fall back to their defaults:
///
/// ```rust
/// use qntx_ngram::IndexConfig;
///
/// let config = IndexConfig::from_json(r#"{ "n": 4 }"#).unwrap();
/// assert_eq!(config.n, 4);
/// assert_eq!(config.pad, '$');
/// assert_eq!(config.warp, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Character added once before and once after every input
    pub pad: char,
    /// Gram size in code points, in `[2, 8]`
    pub n: usize,
    /// Score exponent in `[0, 1]`
    pub warp: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD,
            n: DEFAULT_N,
            warp: DEFAULT_WARP,
        }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| IndexError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config.normalized())
    }

    pub fn with_pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    pub fn with_n(mut self, n: usize) -> Result<Self> {
        validate_n(n)?;
        self.n = n;
        Ok(self)
    }

    /// Set the score exponent. A warp of 0.0 means "unset" and becomes 1.0.
    pub fn with_warp(mut self, warp: f64) -> Result<Self> {
        validate_warp(warp)?;
        self.warp = warp;
        Ok(self.normalized())
    }

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<()> {
        validate_n(self.n)?;
        validate_warp(self.warp)
    }

    /// Replace the zero warp with [`DEFAULT_WARP`]; `0^0 == 1` would
    /// otherwise score every candidate, exact matches included, as 0.0
    pub(crate) fn normalized(mut self) -> Self {
        if self.warp == 0.0 {
            self.warp = DEFAULT_WARP;
        }
        self
    }

    pub(crate) fn tokenizer(&self) -> Result<Tokenizer> {
        Tokenizer::new(self.pad, self.n)
    }
}

fn validate_warp(warp: f64) -> Result<()> {
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&warp) {
        return Err(IndexError::InvalidConfiguration(format!(
            "warp must be in [0, 1], got {}",
            warp
        )));
    }
    Ok(())
}
