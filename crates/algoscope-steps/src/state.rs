//! Immutable per-step algorithm state snapshots.

use std::collections::BTreeMap;

use algoscope_graph::{Edge, NodeId};
use serde::{Deserialize, Serialize};

use crate::heap::Polarity;

/// One immutable snapshot of an algorithm's state.
///
/// Generators yield a fresh value per step rather than mutating a shared
/// one, so history can be retained and replayed without aliasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlgorithmState {
    Bfs(BfsState),
    Dijkstra(DijkstraState),
    Prim(PrimState),
    Heap(HeapState),
    Sort(SortState),
}

/// BFS traversal state: visitation order so far and the pending frontier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BfsState {
    pub order: Vec<NodeId>,
    pub frontier: Vec<NodeId>,
}

/// Dijkstra relaxation state.
///
/// A distance of `None` means "still infinite": either not yet discovered
/// or unreachable in the final snapshot. Unreachable nodes also have no
/// predecessor entry. Neither is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraState {
    pub start: NodeId,
    pub distances: BTreeMap<NodeId, Option<f64>>,
    pub predecessors: BTreeMap<NodeId, NodeId>,
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
}

impl DijkstraState {
    /// Reconstruct the shortest path from the start node to `node` by
    /// walking the predecessor chain. Returns `None` for unreachable nodes.
    pub fn path_to(&self, node: &NodeId) -> Option<Vec<NodeId>> {
        if self.distances.get(node)?.is_none() {
            return None;
        }
        let mut path = vec![node.clone()];
        let mut cursor = node;
        while let Some(prev) = self.predecessors.get(cursor) {
            path.push(prev.clone());
            cursor = prev;
        }
        if *cursor != self.start {
            return None;
        }
        path.reverse();
        Some(path)
    }
}

/// Prim MST state: visited set, accepted tree edges, running total weight.
///
/// On a disconnected graph the final snapshot holds a partial MST covering
/// the start node's component; that is the correct output, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimState {
    pub visited: Vec<NodeId>,
    pub mst: Vec<Edge>,
    pub total_weight: f64,
}

/// Binary heap state: the backing array and the comparator polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeapState {
    pub values: Vec<i64>,
    pub polarity: Polarity,
}

impl HeapState {
    /// Whether the heap invariant holds: the comparator prefers every
    /// parent over each of its existing children.
    pub fn satisfies_invariant(&self) -> bool {
        (0..self.values.len()).all(|i| {
            [2 * i + 1, 2 * i + 2].iter().all(|&child| {
                child >= self.values.len()
                    || self.polarity.prefers(self.values[i], self.values[child])
            })
        })
    }
}

/// Sorting state: the full array after this step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    pub values: Vec<i64>,
}
