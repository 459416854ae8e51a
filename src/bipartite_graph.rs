use std::collections::HashMap;
use std::hash::Hash;
use itertools::Itertools;
use tracing::trace;
use crate::error::{MatchingError, MatchingResult, Side};
use crate::exact;
use crate::greedy;
use crate::matching::MatchResult;

/// Ordered set of labels on one side of the graph. The position of a label is its id.
#[derive(Debug, Clone)]
struct VertexSet<T> {
    labels: Vec<T>,
    ids: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> VertexSet<T> {
    fn new() -> Self {
        VertexSet { labels: Vec::new(), ids: HashMap::new() }
    }

    fn id(&self, label: &T) -> Option<usize> {
        self.ids.get(label).copied()
    }

    fn insert(&mut self, label: T) -> usize {
        if let Some(id) = self.id(&label) {
            return id;
        }
        let id = self.labels.len();
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        id
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

/// A bipartite graph between left vertices (e.g. workers) and right vertices (e.g. jobs).
///
/// Both sides are identified by labels of the same type `T`, but each side keeps its own id
/// space: left ids index `left`, right ids index `right`, and a label appearing on both sides
/// denotes two different vertices. Vertices only come into existence through `insert_edge`.
/// Edges cannot be removed.
#[derive(Debug, Clone)]
pub struct BipartiteGraph<T> {
    capacity: usize,
    left: VertexSet<T>,
    right: VertexSet<T>,
    pub(crate) adjs: Vec<Vec<usize>>, // right ids adjacent to left vertex i, in insertion order
    edge_count: usize,
}

impl<T: Eq + Hash + Clone> BipartiteGraph<T> {
    /// Creates an empty graph that accepts at most `capacity` distinct left vertices.
    pub fn new(capacity: usize) -> BipartiteGraph<T> {
        BipartiteGraph {
            capacity,
            left: VertexSet::new(),
            right: VertexSet::new(),
            adjs: Vec::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from a sequence of `(left, right)` edges.
    pub fn from_edges<I>(capacity: usize, edges: I) -> MatchingResult<BipartiteGraph<T>>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut g = BipartiteGraph::new(capacity);
        for (u, v) in edges {
            g.insert_edge(u, v)?;
        }
        Ok(g)
    }

    /// Adds the edge `left -> right`, registering either endpoint if it is new.
    ///
    /// Repeated edges are kept. If `left` is new and the left side already holds `capacity`
    /// vertices, the graph is left unchanged and `CapacityExceeded` is returned.
    pub fn insert_edge(&mut self, left: T, right: T) -> MatchingResult<()> {
        if self.left.id(&left).is_none() && self.left.len() >= self.capacity {
            return Err(MatchingError::CapacityExceeded { capacity: self.capacity });
        }
        let u = self.left.insert(left);
        if u == self.adjs.len() {
            self.adjs.push(Vec::new());
        }
        let v = self.right.insert(right);
        self.adjs[u].push(v);
        self.edge_count += 1;
        trace!(left = u, right = v, "inserted edge");
        Ok(())
    }

    /// Labels of the right neighbors of left vertex `u`, in insertion order.
    pub fn neighbors(&self, u: usize) -> MatchingResult<Vec<&T>> {
        let adj = self.adjs.get(u).ok_or(MatchingError::UnknownVertex {
            side: Side::Left,
            id: u,
            count: self.left.len(),
        })?;
        Ok(adj.iter().map(|&v| &self.right.labels[v]).collect_vec())
    }

    /// Number of edges at left vertex `u`, repeated edges included.
    pub fn degree(&self, u: usize) -> MatchingResult<usize> {
        self.check_left(u)?;
        Ok(self.adjs[u].len())
    }

    pub fn left_count(&self) -> usize {
        self.left.len()
    }

    pub fn right_count(&self) -> usize {
        self.right.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of inserted edges, repeated edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn left_label(&self, u: usize) -> MatchingResult<&T> {
        self.check_left(u)?;
        Ok(&self.left.labels[u])
    }

    pub fn right_label(&self, v: usize) -> MatchingResult<&T> {
        self.right.labels.get(v).ok_or(MatchingError::UnknownVertex {
            side: Side::Right,
            id: v,
            count: self.right.len(),
        })
    }

    pub fn left_id(&self, label: &T) -> Option<usize> {
        self.left.id(label)
    }

    pub fn right_id(&self, label: &T) -> Option<usize> {
        self.right.id(label)
    }

    /// Runs the single-pass greedy heuristic, see [`greedy::matching`].
    pub fn greedy_match(&self) -> MatchResult<T> {
        greedy::matching(self)
    }

    /// Computes a maximum matching with default search limits, see [`exact::maximum_matching`].
    pub fn exact_match(&self) -> MatchingResult<MatchResult<T>> {
        exact::maximum_matching(self)
    }

    fn check_left(&self, u: usize) -> MatchingResult<()> {
        if u < self.left.len() {
            Ok(())
        } else {
            Err(MatchingError::UnknownVertex { side: Side::Left, id: u, count: self.left.len() })
        }
    }

    /// Label of right vertex `v`, for ids taken from `adjs`.
    pub(crate) fn right_label_unchecked(&self, v: usize) -> &T {
        &self.right.labels[v]
    }
}
