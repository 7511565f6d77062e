//! Weight table and ranked index kept in lockstep.

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::index::RankedIndex;
use crate::weights::WeightTable;
use crate::Phrase;

/// Weighted phrase corpus.
///
/// Every phrase recorded in the weight table has been inserted into the
/// index with its weight at the time of recording.
#[derive(Debug, Clone)]
pub struct Corpus {
    weights: WeightTable,
    index: RankedIndex,
}

impl Corpus {
    /// Create an empty corpus keeping `top_k` suggestions per prefix.
    pub fn new(top_k: usize) -> Result<Self> {
        Config::default().with_top_k(top_k).validate()?;
        Ok(Self::empty(top_k))
    }

    fn empty(top_k: usize) -> Self {
        Self {
            weights: WeightTable::new(),
            index: RankedIndex::new(top_k),
        }
    }

    /// Build a corpus from parallel phrase/weight sequences, paired by position.
    ///
    /// Repeated phrases have their weights summed. The order of the pairs has
    /// no effect on the resulting suggestions.
    pub fn seed<S: AsRef<str>>(config: &Config, phrases: &[S], weights: &[u64]) -> Result<Self> {
        config.validate()?;
        if phrases.len() != weights.len() {
            return Err(Error::SeedLengthMismatch {
                phrases: phrases.len(),
                weights: weights.len(),
            });
        }

        let mut corpus = Self::empty(config.top_k);
        for (phrase, &weight) in phrases.iter().zip(weights) {
            corpus.record(phrase.as_ref(), weight);
        }
        debug!(
            pairs = phrases.len(),
            phrases = corpus.len(),
            nodes = corpus.node_count(),
            top_k = config.top_k,
            "seeded corpus"
        );
        Ok(corpus)
    }

    /// Add `amount` to the weight of `phrase` and re-rank its path.
    ///
    /// Returns the weight after the addition.
    pub(crate) fn record(&mut self, phrase: &str, amount: u64) -> u64 {
        let (phrase, weight) = self.weights.add(phrase, amount);
        self.index.insert(&phrase, &self.weights);
        weight
    }

    /// Commit one completed session for `phrase`.
    pub(crate) fn commit(&mut self, phrase: &str) -> u64 {
        let weight = self.record(phrase, 1);
        debug!(chars = phrase.chars().count(), weight, "committed phrase");
        weight
    }

    /// Up to `top_k` phrases starting with `prefix`, best first.
    #[inline]
    pub fn suggest(&self, prefix: &str) -> &[Phrase] {
        self.index.lookup(prefix)
    }

    /// Current weight of `phrase` (0 if never recorded).
    #[inline]
    pub fn weight(&self, phrase: &str) -> u64 {
        self.weights.get(phrase)
    }

    #[inline]
    pub fn contains(&self, phrase: &str) -> bool {
        self.weights.contains(phrase)
    }

    /// Number of distinct phrases recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn top_k(&self) -> usize {
        self.index.top_k()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.index.node_count()
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> &RankedIndex {
        &self.index
    }
}
