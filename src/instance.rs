use std::io::Read;
use thiserror::Error;
use tracing::{info, warn};
use crate::bipartite_graph::BipartiteGraph;
use crate::error::MatchingError;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read the instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing header field `{0}`")]
    MissingHeader(&'static str),

    #[error("header field `{field}` is not a count: {value:?}")]
    InvalidHeader { field: &'static str, value: String },

    #[error("expected {expected} edges, input ends after {found}")]
    MissingEdge { expected: usize, found: usize },

    #[error(transparent)]
    Matching(#[from] MatchingError),
}

/// A matching problem as read from text: worker and job counts followed by worker-job pairs.
///
/// The format is whitespace separated, `left_count right_count edge_count` and then
/// `edge_count` pairs of label tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub left_count: usize,
    pub right_count: usize,
    pub edges: Vec<(String, String)>,
}

impl Instance {
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Instance, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Instance::parse(&text)
    }

    pub fn from_stdin() -> Result<Instance, InputError> {
        Instance::from_reader(std::io::stdin().lock())
    }

    pub fn parse(text: &str) -> Result<Instance, InputError> {
        let mut tokens = text.split_whitespace();
        let mut count = |field: &'static str| -> Result<usize, InputError> {
            let token = tokens.next().ok_or(InputError::MissingHeader(field))?;
            token.parse::<usize>().map_err(|_| InputError::InvalidHeader { field, value: token.to_string() })
        };
        let left_count = count("left_count")?;
        let right_count = count("right_count")?;
        let edge_count = count("edge_count")?;

        let mut edges = Vec::new();
        while edges.len() < edge_count {
            match (tokens.next(), tokens.next()) {
                (Some(u), Some(v)) => edges.push((u.to_string(), v.to_string())),
                _ => return Err(InputError::MissingEdge { expected: edge_count, found: edges.len() }),
            }
        }
        let surplus = tokens.count();
        if surplus > 0 {
            warn!(tokens = surplus, "ignoring input after the declared edges");
        }
        info!(left_count, right_count, edge_count, "read instance");
        Ok(Instance { left_count, right_count, edges })
    }

    /// Builds the graph, with room for `left_count` left vertices.
    pub fn into_graph(self) -> Result<BipartiteGraph<String>, InputError> {
        let declared_right = self.right_count;
        let g = BipartiteGraph::from_edges(self.left_count, self.edges)?;
        if g.right_count() > declared_right {
            warn!(declared = declared_right, found = g.right_count(), "more right vertices than declared");
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_edges() {
        let instance = Instance::parse("2 2 3\nana cook\nana driver\nbia cook\n").unwrap();
        assert_eq!(instance.left_count, 2);
        assert_eq!(instance.right_count, 2);
        assert_eq!(instance.edges[2], ("bia".to_string(), "cook".to_string()));

        let g = instance.into_graph().unwrap();
        assert_eq!(g.left_count(), 2);
        assert_eq!(g.greedy_match().cardinality(), 1);
        assert_eq!(g.exact_match().unwrap().cardinality(), 2);
    }

    #[test]
    fn reads_from_any_reader() {
        let instance = Instance::from_reader("1 1 1 a x".as_bytes()).unwrap();
        assert_eq!(instance.edges, vec![("a".to_string(), "x".to_string())]);
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(matches!(Instance::parse("2 2"), Err(InputError::MissingHeader("edge_count"))));
        assert!(matches!(
            Instance::parse("2 2 2\na x\nb"),
            Err(InputError::MissingEdge { expected: 2, found: 1 })
        ));
        assert!(matches!(
            Instance::parse("1 1 18446744073709551615 a x"),
            Err(InputError::MissingEdge { expected: usize::MAX, found: 1 })
        ));
        assert!(matches!(
            Instance::parse("3 3 99999999999999 a x"),
            Err(InputError::MissingEdge { expected: 99999999999999, found: 1 })
        ));
    }

    #[test]
    fn rejects_bad_header() {
        match Instance::parse("two 2 2") {
            Err(InputError::InvalidHeader { field, value }) => {
                assert_eq!(field, "left_count");
                assert_eq!(value, "two");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn too_many_workers() {
        let instance = Instance::parse("1 2 2\na x\nb y").unwrap();
        assert!(matches!(
            instance.into_graph(),
            Err(InputError::Matching(MatchingError::CapacityExceeded { capacity: 1 }))
        ));
    }
}
