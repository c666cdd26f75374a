//! Breadth-first traversal generator.
//!
//! Textbook FIFO BFS with the visited check on dequeue, not on enqueue:
//! a node may be enqueued more than once, but a dequeue of an
//! already-visited node is filtered out and produces no snapshot. Edges are
//! traversed as undirected.
//!
//! Snapshots: the initialized state (empty order, frontier seeded with the
//! start node), then one snapshot per dequeue that newly visits a node.

use std::collections::{HashSet, VecDeque};

use algoscope_graph::{Graph, NodeId};

use crate::state::{AlgorithmState, BfsState};

/// Lazy BFS state sequence.
#[derive(Debug)]
pub struct BfsGenerator {
    graph: Graph,
    frontier: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
    order: Vec<NodeId>,
    initialized: bool,
}

impl BfsGenerator {
    /// Build a generator over a private copy of the graph.
    ///
    /// The start node must exist; [`RunRequest`](crate::RunRequest) checks
    /// that before constructing.
    pub(crate) fn new(graph: Graph, start: NodeId) -> Self {
        Self {
            graph,
            frontier: VecDeque::from([start]),
            visited: HashSet::new(),
            order: Vec::new(),
            initialized: false,
        }
    }

    fn snapshot(&self) -> AlgorithmState {
        AlgorithmState::Bfs(BfsState {
            order: self.order.clone(),
            frontier: self.frontier.iter().cloned().collect(),
        })
    }
}

impl Iterator for BfsGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        if !self.initialized {
            self.initialized = true;
            return Some(self.snapshot());
        }

        while let Some(node) = self.frontier.pop_front() {
            if !self.visited.insert(node.clone()) {
                continue;
            }
            self.order.push(node.clone());
            let unvisited: Vec<NodeId> = self
                .graph
                .neighbors(&node, false)
                .filter(|(n, _)| !self.visited.contains(*n))
                .map(|(n, _)| n.clone())
                .collect();
            self.frontier.extend(unvisited);
            return Some(self.snapshot());
        }
        None
    }
}
