use std::hash::Hash;
use bit_set::BitSet;
use itertools::Itertools;
use crate::bipartite_graph::BipartiteGraph;

/// A matching produced by one of the matchers.
///
/// Holds the matched `(left id, right label)` pairs in increasing left id order. Unmatched left
/// vertices simply do not appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<T> {
    pairs: Vec<(usize, T)>,
}

impl<T: Eq + Hash + Clone> MatchResult<T> {
    /// Collects the pairs from a left id -> right id assignment.
    pub(crate) fn from_mates(g: &BipartiteGraph<T>, mates: &[Option<usize>]) -> MatchResult<T> {
        let pairs = mates.iter()
            .enumerate()
            .filter_map(|(u, mate)| mate.map(|v| (u, g.right_label_unchecked(v).clone())))
            .collect_vec();
        MatchResult { pairs }
    }

    /// Number of matched pairs.
    pub fn cardinality(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(usize, T)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(usize, T)> {
        self.pairs
    }

    /// The right label matched to left vertex `u`, if any.
    pub fn mate_of(&self, u: usize) -> Option<&T> {
        self.pairs.binary_search_by_key(&u, |(l, _)| *l).ok().map(|i| &self.pairs[i].1)
    }

    /// Checks that this is a matching of `g`: every pair is an edge of `g`, and no left or
    /// right vertex occurs twice.
    pub fn is_valid_for(&self, g: &BipartiteGraph<T>) -> bool {
        let mut lefts = BitSet::with_capacity(g.left_count());
        let mut rights = BitSet::with_capacity(g.right_count());
        self.pairs.iter().all(|(u, label)| {
            let Some(v) = g.right_id(label) else { return false };
            let Ok(neighbors) = g.neighbors(*u) else { return false };
            neighbors.contains(&label) && lefts.insert(*u) && rights.insert(v)
        })
    }
}
