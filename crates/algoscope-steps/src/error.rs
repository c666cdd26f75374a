//! Error types for generator construction.

use algoscope_graph::NodeId;
use thiserror::Error;

/// Result type for step-generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced when building a generator, before any step is yielded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested start node is absent from the input graph.
    #[error("start node {0} is not present in the graph")]
    UnknownStartNode(NodeId),
}
