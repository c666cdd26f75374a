//! Algoscope Graph Model
//!
//! Labelled, weighted graph used as the input to every graph algorithm in
//! algoscope. Nodes are opaque string labels, edges are ordered pairs with a
//! finite non-negative weight. Parallel edges between the same pair are
//! permitted and independent.
//!
//! # Determinism
//!
//! Nodes and edges are stored in insertion order, and every iteration the
//! graph exposes follows that order. Algorithm tie-breaks (equal tentative
//! distances, equal crossing-edge weights) therefore resolve to the
//! first-inserted candidate, which keeps every run of the same input
//! byte-for-byte reproducible.
//!
//! # Copy-on-start
//!
//! `Graph` is `Clone` with no shared storage between clones. Step generators
//! clone the graph at construction time, so edits made to the caller's graph
//! after a run has started are never observed by that run.

mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeId};
