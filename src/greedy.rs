use std::hash::Hash;
use bit_set::BitSet;
use tracing::debug;
use crate::bipartite_graph::BipartiteGraph;
use crate::matching::MatchResult;

/// Single pass first-come-first-served matching.
///
/// Left vertices are visited in arrival order and each one takes the first right neighbor (in
/// edge insertion order) that no earlier left vertex has claimed. Decisions are never revisited,
/// so the result is a valid matching whose size is only a lower bound on the maximum. Runs in
/// O(V + E).
pub fn matching<T: Eq + Hash + Clone>(g: &BipartiteGraph<T>) -> MatchResult<T> {
    let mut claimed = BitSet::with_capacity(g.right_count());
    let mut mates: Vec<Option<usize>> = vec![None; g.left_count()];
    for (u, adj) in g.adjs.iter().enumerate() {
        mates[u] = adj.iter().cloned().find(|v| !claimed.contains(*v));
        if let Some(v) = mates[u] {
            claimed.insert(v);
        }
    }
    let result = MatchResult::from_mates(g, &mates);
    debug!(left = g.left_count(), matched = result.cardinality(), "greedy matching done");
    result
}
