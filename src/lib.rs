pub mod bipartite_graph;
pub mod error;
pub mod matching;
pub mod greedy;
pub mod exact;
pub mod instance;

// Re-exports to flatten the crate.
pub use bipartite_graph::BipartiteGraph;
pub use error::{MatchingError, MatchingResult, Side};
pub use exact::SearchLimits;
pub use instance::{Instance, InputError};
pub use matching::MatchResult;
