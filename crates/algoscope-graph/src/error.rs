//! Error types for the graph model.

use thiserror::Error;

use crate::NodeId;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Edge weight was NaN, infinite, or negative.
    #[error("invalid weight {weight} on edge {from} -> {to}: must be a finite non-negative number")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },
}
