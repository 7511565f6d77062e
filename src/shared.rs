//! Multi-session front end over one corpus.
//!
//! Each [`SharedSession`] owns its buffer; the corpus behind them sits in a
//! single `RwLock`. Lookups take the read lock. A commit takes the write lock
//! for both the weight increment and the re-rank of the phrase's path, so no
//! reader sees a node mid-sort.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::session::{Keystroke, SessionBuffer};
use crate::Phrase;

/// A corpus shared by any number of concurrent sessions.
///
/// Cloning is cheap and yields another handle to the same corpus.
#[derive(Clone)]
pub struct SharedCorpus {
    inner: Arc<RwLock<Corpus>>,
    terminator: char,
}

impl SharedCorpus {
    /// Wrap an existing corpus, using the default terminator for sessions.
    pub fn new(corpus: Corpus) -> Self {
        Self::with_terminator(corpus, Config::DEFAULT_TERMINATOR)
    }

    pub fn with_terminator(corpus: Corpus, terminator: char) -> Self {
        Self {
            inner: Arc::new(RwLock::new(corpus)),
            terminator,
        }
    }

    /// Seed a shared corpus from parallel phrase/weight sequences.
    pub fn seed<S: AsRef<str>>(config: &Config, phrases: &[S], weights: &[u64]) -> Result<Self> {
        let corpus = Corpus::seed(config, phrases, weights)?;
        Ok(Self::with_terminator(corpus, config.terminator))
    }

    /// Open a new session with an empty buffer.
    pub fn session(&self) -> SharedSession {
        SharedSession {
            corpus: self.clone(),
            buffer: SessionBuffer::new(self.terminator),
        }
    }

    /// Snapshot of the suggestions for `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<Phrase> {
        self.inner.read().suggest(prefix).to_vec()
    }

    pub fn weight(&self, phrase: &str) -> u64 {
        self.inner.read().weight(phrase)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

/// One client's typing session against a [`SharedCorpus`].
pub struct SharedSession {
    corpus: SharedCorpus,
    buffer: SessionBuffer,
}

impl SharedSession {
    /// Feed one character.
    ///
    /// Returns a snapshot of up to K suggestions for the buffer, or an empty
    /// list when `c` is the terminator and the buffer was committed.
    pub fn input(&mut self, c: char) -> Vec<Phrase> {
        match self.buffer.feed(c) {
            Keystroke::Committed(phrase) => {
                self.corpus.inner.write().commit(&phrase);
                Vec::new()
            }
            Keystroke::Typed(prefix) => self.corpus.suggest(prefix),
        }
    }

    #[inline]
    pub fn pending(&self) -> &str {
        self.buffer.pending()
    }

    pub fn corpus(&self) -> &SharedCorpus {
        &self.corpus
    }
}
