//! # hotrank
//!
//! Ranked prefix suggestions over a weighted phrase corpus.
//!
//! Every trie node keeps the top-K phrases passing through it, ordered by
//! weight (descending) and then lexicographically. Typing a character returns
//! the list cached at the node for the text typed so far, so a lookup costs
//! O(prefix length) regardless of corpus size. Typing the terminator commits
//! the typed phrase with its weight bumped by one.
//!
//! ## Example
//!
//! ```rust
//! use hotrank::Autocomplete;
//!
//! let mut ac = Autocomplete::new(
//!     &["i love you", "island", "ironman", "i love leetcode"],
//!     &[5, 3, 2, 2],
//! );
//!
//! let top: Vec<&str> = ac.input('i').iter().map(AsRef::as_ref).collect();
//! assert_eq!(top, ["i love you", "island", "i love leetcode"]);
//!
//! let top: Vec<&str> = ac.input(' ').iter().map(AsRef::as_ref).collect();
//! assert_eq!(top, ["i love you", "i love leetcode"]);
//!
//! assert!(ac.input('#').is_empty());
//! assert_eq!(ac.corpus().weight("i "), 1);
//! ```

use std::sync::Arc;

mod config;
mod corpus;
mod error;
mod index;
mod session;
mod shared;
mod weights;

pub use config::Config;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use index::RankedIndex;
pub use session::{Keystroke, SessionBuffer};
pub use shared::{SharedCorpus, SharedSession};
pub use weights::WeightTable;

/// A phrase as stored in the corpus. Shared between the weight table and
/// every index node that lists it.
pub type Phrase = Arc<str>;

/// Single-owner autocomplete engine: one corpus, one typing session.
///
/// For several concurrent sessions over one corpus see [`SharedCorpus`].
#[derive(Debug, Clone)]
pub struct Autocomplete {
    corpus: Corpus,
    session: SessionBuffer,
}

impl Autocomplete {
    /// Seed an engine with the default configuration (K=3, terminator `'#'`).
    ///
    /// # Panics
    ///
    /// Panics if `sentences` and `times` differ in length.
    pub fn new<S: AsRef<str>>(sentences: &[S], times: &[u64]) -> Self {
        assert_eq!(
            sentences.len(),
            times.len(),
            "every seed phrase needs exactly one weight"
        );
        match Self::try_new(sentences, times) {
            Ok(ac) => ac,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`new`](Self::new), but reports a length mismatch as an error.
    pub fn try_new<S: AsRef<str>>(sentences: &[S], times: &[u64]) -> Result<Self> {
        Self::with_config(Config::default(), sentences, times)
    }

    pub fn with_config<S: AsRef<str>>(
        config: Config,
        sentences: &[S],
        times: &[u64],
    ) -> Result<Self> {
        let corpus = Corpus::seed(&config, sentences, times)?;
        Ok(Self {
            corpus,
            session: SessionBuffer::new(config.terminator),
        })
    }

    /// Feed one typed character.
    ///
    /// A regular character extends the session and returns up to K phrases
    /// starting with everything typed so far. The terminator commits the
    /// typed phrase (weight +1), resets the session, and returns nothing.
    pub fn input(&mut self, c: char) -> &[Phrase] {
        match self.session.feed(c) {
            Keystroke::Committed(phrase) => {
                self.corpus.commit(&phrase);
                &[]
            }
            Keystroke::Typed(prefix) => self.corpus.suggest(prefix),
        }
    }

    /// Text typed in the current session, not yet committed.
    #[inline]
    pub fn pending(&self) -> &str {
        self.session.pending()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Hand the corpus over to a multi-session front end, keeping this
    /// engine's terminator.
    pub fn into_shared(self) -> SharedCorpus {
        SharedCorpus::with_terminator(self.corpus, self.session.terminator())
    }
}


#[cfg(test)]
mod proptests;
