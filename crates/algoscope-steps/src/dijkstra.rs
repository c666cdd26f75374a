//! Dijkstra shortest-path generator.
//!
//! Classic relaxation over directed edges with non-negative weights. The
//! candidate pool holds every node of the graph; each step finalizes the
//! pool member with the minimum tentative distance, ties broken by node
//! insertion order (first-inserted wins), then relaxes its outgoing edges.
//! Unreachable nodes are finalized too, retaining an infinite distance and
//! no predecessor - a valid terminal state, not an error.
//!
//! Snapshots: the initialized state (start at 0, everything else infinite),
//! then one snapshot per finalized node, so a run over `n` nodes yields
//! exactly `n + 1` states.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use algoscope_graph::{Graph, NodeId};

use crate::state::{AlgorithmState, DijkstraState};

/// Lazy Dijkstra state sequence.
#[derive(Debug)]
pub struct DijkstraGenerator {
    graph: Graph,
    start: NodeId,
    pool: Vec<NodeId>,
    distances: BTreeMap<NodeId, Option<f64>>,
    predecessors: BTreeMap<NodeId, NodeId>,
    visited: Vec<NodeId>,
    current: Option<NodeId>,
    initialized: bool,
}

impl DijkstraGenerator {
    pub(crate) fn new(graph: Graph, start: NodeId) -> Self {
        let pool: Vec<NodeId> = graph.nodes().to_vec();
        let mut distances: BTreeMap<NodeId, Option<f64>> =
            pool.iter().map(|n| (n.clone(), None)).collect();
        distances.insert(start.clone(), Some(0.0));
        Self {
            graph,
            start,
            pool,
            distances,
            predecessors: BTreeMap::new(),
            visited: Vec::new(),
            current: None,
            initialized: false,
        }
    }

    fn snapshot(&self) -> AlgorithmState {
        AlgorithmState::Dijkstra(DijkstraState {
            start: self.start.clone(),
            distances: self.distances.clone(),
            predecessors: self.predecessors.clone(),
            visited: self.visited.clone(),
            current: self.current.clone(),
        })
    }

    /// Strict "closer than", with `None` as infinity.
    fn closer(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => x.total_cmp(&y) == Ordering::Less,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl Iterator for DijkstraGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        if !self.initialized {
            self.initialized = true;
            return Some(self.snapshot());
        }

        if self.pool.is_empty() {
            return None;
        }

        // Strict comparison keeps the first-inserted node on ties.
        let mut best = 0;
        for i in 1..self.pool.len() {
            if Self::closer(self.distances[&self.pool[i]], self.distances[&self.pool[best]]) {
                best = i;
            }
        }
        let node = self.pool.remove(best);
        self.visited.push(node.clone());
        self.current = Some(node.clone());

        if let Some(base) = self.distances[&node] {
            let relaxations: Vec<(NodeId, f64)> = self
                .graph
                .neighbors(&node, true)
                .map(|(n, w)| (n.clone(), base + w))
                .collect();
            for (neighbor, alt) in relaxations {
                if Self::closer(Some(alt), self.distances[&neighbor]) {
                    self.distances.insert(neighbor.clone(), Some(alt));
                    self.predecessors.insert(neighbor, node.clone());
                }
            }
        }

        Some(self.snapshot())
    }
}
