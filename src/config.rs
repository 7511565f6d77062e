//! Engine configuration.

use crate::error::{Error, Result};

/// Configuration for an [`Autocomplete`](crate::Autocomplete) engine or a
/// [`SharedCorpus`](crate::SharedCorpus).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of suggestions kept (and returned) per prefix
    pub top_k: usize,
    /// Character that ends a session and commits the typed phrase
    pub terminator: char,
}

impl Config {
    pub const DEFAULT_TOP_K: usize = 3;
    pub const DEFAULT_TERMINATOR: char = '#';

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidTopK);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: Self::DEFAULT_TOP_K,
            terminator: Self::DEFAULT_TERMINATOR,
        }
    }
}
