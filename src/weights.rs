//! Cumulative phrase weights ("hotness").

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::Phrase;

/// Phrase -> cumulative weight.
///
/// The table also interns phrases: the `Arc<str>` handed back by [`add`]
/// is the one every index node holds, so a phrase is allocated once no matter
/// how many prefixes list it.
///
/// [`add`]: WeightTable::add
#[derive(Debug, Default, Clone)]
pub struct WeightTable {
    weights: HashMap<Phrase, u64>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of `phrase`, or 0 if it was never recorded.
    #[inline]
    pub fn get(&self, phrase: &str) -> u64 {
        self.weights.get(phrase).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains(&self, phrase: &str) -> bool {
        self.weights.contains_key(phrase)
    }

    /// Add `amount` to the weight of `phrase`, creating the entry if absent.
    ///
    /// Returns the interned phrase and its weight after the addition.
    pub fn add(&mut self, phrase: &str, amount: u64) -> (Phrase, u64) {
        let key = match self.weights.get_key_value(phrase) {
            Some((key, _)) => Arc::clone(key),
            None => Phrase::from(phrase),
        };
        let weight = self.weights.entry(Arc::clone(&key)).or_insert(0);
        *weight = weight.saturating_add(amount);
        (key, *weight)
    }

    /// Ranking order: heavier first, then lexicographically ascending.
    #[inline]
    pub fn rank(&self, a: &str, b: &str) -> Ordering {
        self.get(b).cmp(&self.get(a)).then_with(|| a.cmp(b))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.weights.iter().map(|(p, w)| (&**p, *w))
    }
}
