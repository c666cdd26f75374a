//! Algoscope Step Generators
//!
//! Pure, lazy, finite state-snapshot sequences for classic teaching
//! algorithms: graph BFS, Dijkstra shortest paths, Prim minimum spanning
//! tree, binary min/max heap operations, and bubble/selection/insertion
//! sorting.
//!
//! # Contract
//!
//! Every generator is an `Iterator<Item = AlgorithmState>` over immutable
//! snapshots. Given identical input the sequence is identical; the first
//! item is always the algorithm's fully initialized starting state, so an
//! observer attaching before the first real transition still sees valid
//! state. Generators are not restartable in place - a fresh run is obtained
//! by asking the [`RunRequest`] for a new generator.
//!
//! # Step granularity
//!
//! Each generator documents exactly which transitions produce a snapshot
//! (see the module docs of [`bfs`], [`dijkstra`], [`prim`], [`heap`], and
//! [`sort`]), so downstream animations and tests are reproducible.

pub mod bfs;
pub mod demo;
pub mod dijkstra;
pub mod heap;
pub mod prim;
pub mod sort;

mod error;
mod request;
mod state;

pub use algoscope_graph::{Edge, Graph, NodeId};
pub use error::{Error, Result};
pub use request::{Registry, RunRequest, StateIter};
pub use state::{
    AlgorithmState, BfsState, DijkstraState, HeapState, PrimState, SortState,
};
pub use heap::{HeapOp, Polarity};
pub use sort::SortAlgorithm;
