//! Character trie with a bounded, ranked candidate list at every node.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::weights::WeightTable;
use crate::Phrase;

/// Inline capacity of a node's list. Covers the default K=3 plus the one
/// extra entry pushed before truncation.
const INLINE_TOP: usize = 4;

#[derive(Debug, Default, Clone)]
pub(crate) struct Node {
    pub(crate) children: HashMap<char, Node>,
    /// Best phrases through this node, best first. At most `top_k` entries.
    pub(crate) top: SmallVec<[Phrase; INLINE_TOP]>,
}

impl Node {
    /// Make `phrase` a candidate here and restore the top-K order.
    ///
    /// Weights are read from `weights` at sort time, so entries already in the
    /// list pick up any increments since the last re-sort.
    fn rank(&mut self, phrase: &Phrase, weights: &WeightTable, top_k: usize) {
        if !self.top.iter().any(|p| p == phrase) {
            self.top.push(Arc::clone(phrase));
        }
        self.top.sort_by(|a, b| weights.rank(a, b));
        self.top.truncate(top_k);
    }
}

/// Ranked prefix index.
///
/// Every node keeps at most `top_k` phrases. Evicted phrases are not
/// retained: weights only grow, and a phrase's weight only grows together
/// with an [`insert`](RankedIndex::insert) along its whole path, which is
/// exactly when it gets a chance to re-enter each node's list.
#[derive(Debug, Clone)]
pub struct RankedIndex {
    pub(crate) root: Node,
    top_k: usize,
    node_count: usize,
}

impl RankedIndex {
    pub fn new(top_k: usize) -> Self {
        Self {
            root: Node::default(),
            top_k,
            node_count: 1,
        }
    }

    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Insert `phrase` along its path, re-ranking every node it passes.
    ///
    /// `phrase` should be the interned handle from `weights`; its current
    /// weight there decides its rank. Nodes off the path are untouched.
    pub fn insert(&mut self, phrase: &Phrase, weights: &WeightTable) {
        let mut node = &mut self.root;
        for ch in phrase.chars() {
            node = match node.children.entry(ch) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    self.node_count += 1;
                    e.insert(Node::default())
                }
            };
            node.rank(phrase, weights, self.top_k);
        }
    }

    /// Ranked suggestions for `prefix`, or an empty slice if no inserted
    /// phrase starts with it.
    pub fn lookup(&self, prefix: &str) -> &[Phrase] {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.top
    }
}
