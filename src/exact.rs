use std::hash::Hash;
use bit_set::BitSet;
use itertools::Itertools;
use tracing::{debug, trace};
use crate::bipartite_graph::BipartiteGraph;
use crate::error::{MatchingError, MatchingResult};
use crate::matching::MatchResult;

/// Bounds on the augmenting path search. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of left vertices on a single alternating path, the root included. A bound
    /// of zero admits no path at all.
    pub max_depth: Option<usize>,
    /// Maximum number of right vertex visits over the whole run.
    pub max_steps: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> SearchLimits {
        SearchLimits::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> SearchLimits {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_max_steps(mut self, steps: usize) -> SearchLimits {
        self.max_steps = Some(steps);
        self
    }
}

/// Computes a maximum cardinality matching of `g` without search limits.
///
/// See [`maximum_matching_with`].
pub fn maximum_matching<T: Eq + Hash + Clone>(g: &BipartiteGraph<T>) -> MatchingResult<MatchResult<T>> {
    maximum_matching_with(g, &SearchLimits::unbounded())
}

/// Computes a maximum cardinality matching of `g` with [Kuhn's algorithm].
///
/// Every left vertex, in arrival order, is the root of exactly one search for an [augmenting
/// path]: a depth-first search that walks to an unvisited right neighbor and either finds it
/// free, or continues from the left vertex currently matched to it. When a free right vertex is
/// reached, every left vertex on the path moves to the right vertex it was entered through, which
/// grows the matching by one. After root `u` has been processed, the matching is maximum for the
/// subgraph induced by the left vertices `0..=u`. Each search visits any right vertex at most once,
/// so the whole run is O(V * E).
///
/// # Explicit stack
/// The search keeps its own stack of `(left vertex, adjacency cursor)` frames, together with the
/// right vertex through which every frame but the root was entered, so the path length is only
/// bounded by the number of right vertices and never by the thread stack. `limits` can bound the
/// path length and the total work; exceeding either bound aborts with `ResourceExhausted`.
///
/// [Kuhn's algorithm]: https://en.wikipedia.org/wiki/Hungarian_algorithm
/// [augmenting path]: https://en.wikipedia.org/wiki/Matching_(graph_theory)#In_unweighted_bipartite_graphs
pub fn maximum_matching_with<T: Eq + Hash + Clone>(
    g: &BipartiteGraph<T>,
    limits: &SearchLimits,
) -> MatchingResult<MatchResult<T>> {
    let mut search = Search::new(g.adjs.as_slice(), g.right_count(), limits);
    let mut size = 0;
    for u in 0..g.left_count() {
        if search.augment(u)? {
            size += 1;
        } else {
            trace!(left = u, "no augmenting path");
        }
    }
    let result = MatchResult::from_mates(g, &search.left_mate);
    debug_assert_eq!(result.cardinality(), size);
    debug!(left = g.left_count(), right = g.right_count(), matched = size, steps = search.steps, "maximum matching done");
    Ok(result)
}

struct Frame {
    left: usize,
    cursor: usize,
}

/// Matching state of one run. Nothing here outlives a call to `maximum_matching_with`.
struct Search<'a> {
    adjs: &'a [Vec<usize>],
    limits: &'a SearchLimits,
    left_mate: Vec<Option<usize>>,
    right_mate: Vec<Option<usize>>,
    visited: BitSet,
    stack: Vec<Frame>,
    via: Vec<usize>, // via[i] is the right vertex through which stack[i + 1] was entered
    steps: usize,
}

impl<'a> Search<'a> {
    fn new(adjs: &'a [Vec<usize>], right_count: usize, limits: &'a SearchLimits) -> Search<'a> {
        Search {
            adjs,
            limits,
            left_mate: vec![None; adjs.len()],
            right_mate: vec![None; right_count],
            visited: BitSet::with_capacity(right_count),
            stack: Vec::new(),
            via: Vec::new(),
            steps: 0,
        }
    }

    /// Searches an augmenting path from the unmatched left vertex `root` and applies it.
    fn augment(&mut self, root: usize) -> MatchingResult<bool> {
        self.visited.clear();
        self.stack.clear();
        self.via.clear();
        self.push(root)?;

        let adjs = self.adjs;
        while let Some(top) = self.stack.last_mut() {
            let adj = &adjs[top.left];
            if top.cursor == adj.len() {
                // every neighbor of this left vertex is a dead end
                self.stack.pop();
                self.via.pop();
                continue;
            }
            let v = adj[top.cursor];
            top.cursor += 1;
            if !self.visited.insert(v) {
                continue;
            }
            self.steps += 1;
            if let Some(bound) = self.limits.max_steps {
                if self.steps > bound {
                    return Err(MatchingError::ResourceExhausted { limit: "max_steps", bound });
                }
            }
            self.via.push(v);
            match self.right_mate[v] {
                None => {
                    self.flip();
                    return Ok(true);
                }
                Some(w) => self.push(w)?,
            }
        }
        Ok(false)
    }

    /// Puts left vertex `u` on the path, unless the path is already as long as allowed.
    fn push(&mut self, u: usize) -> MatchingResult<()> {
        if let Some(bound) = self.limits.max_depth {
            if self.stack.len() >= bound {
                return Err(MatchingError::ResourceExhausted { limit: "max_depth", bound });
            }
        }
        self.stack.push(Frame { left: u, cursor: 0 });
        Ok(())
    }

    /// Rematches every left vertex on the stack to the right vertex following it on the path.
    fn flip(&mut self) {
        for (frame, &v) in self.stack.iter().zip_eq(self.via.iter()) {
            self.left_mate[frame.left] = Some(v);
            self.right_mate[v] = Some(frame.left);
        }
    }
}
