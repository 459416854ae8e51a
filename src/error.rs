use std::fmt;
use thiserror::Error;

/// The two independent vertex sets of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors raised while building or querying a graph and while matching it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    #[error("left side is full: at most {capacity} distinct left vertices allowed")]
    CapacityExceeded { capacity: usize },

    #[error("unknown {side} vertex {id} (only {count} registered)")]
    UnknownVertex { side: Side, id: usize, count: usize },

    #[error("augmenting path search exceeded its {limit} bound of {bound}")]
    ResourceExhausted { limit: &'static str, bound: usize },
}

pub type MatchingResult<T> = Result<T, MatchingError>;
