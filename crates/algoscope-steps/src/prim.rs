//! Prim minimum-spanning-tree generator.
//!
//! Edges are treated as undirected. Each step scans all edges with exactly
//! one endpoint inside the visited set, accepts the minimum-weight crossing
//! edge (ties broken by edge insertion order, first-inserted wins), and
//! absorbs the newly reached endpoint. The run ends when no crossing edge
//! remains: on a connected graph that is a full MST, on a disconnected
//! graph a partial MST covering the start component.
//!
//! Snapshots: the initialized state (visited = {start}, empty tree), then
//! one snapshot per accepted edge. Accepted edges are stored oriented from
//! the already-visited endpoint to the new one.

use algoscope_graph::{Edge, Graph, NodeId};

use crate::state::{AlgorithmState, PrimState};

/// Lazy Prim state sequence.
#[derive(Debug)]
pub struct PrimGenerator {
    graph: Graph,
    visited: Vec<NodeId>,
    mst: Vec<Edge>,
    total_weight: f64,
    initialized: bool,
}

impl PrimGenerator {
    pub(crate) fn new(graph: Graph, start: NodeId) -> Self {
        Self {
            graph,
            visited: vec![start],
            mst: Vec::new(),
            total_weight: 0.0,
            initialized: false,
        }
    }

    fn snapshot(&self) -> AlgorithmState {
        AlgorithmState::Prim(PrimState {
            visited: self.visited.clone(),
            mst: self.mst.clone(),
            total_weight: self.total_weight,
        })
    }

    /// Cheapest edge with exactly one endpoint visited, oriented
    /// visited -> unvisited. Strict comparison keeps the first-inserted
    /// edge on weight ties.
    fn cheapest_crossing_edge(&self) -> Option<Edge> {
        let mut best: Option<Edge> = None;
        for edge in self.graph.edges() {
            let from_in = self.visited.contains(&edge.from);
            let to_in = self.visited.contains(&edge.to);
            if from_in == to_in {
                continue;
            }
            let oriented = if from_in {
                edge.clone()
            } else {
                Edge {
                    from: edge.to.clone(),
                    to: edge.from.clone(),
                    weight: edge.weight,
                }
            };
            if best.as_ref().map_or(true, |b| oriented.weight < b.weight) {
                best = Some(oriented);
            }
        }
        best
    }
}

impl Iterator for PrimGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        if !self.initialized {
            self.initialized = true;
            return Some(self.snapshot());
        }

        let edge = self.cheapest_crossing_edge()?;
        self.visited.push(edge.to.clone());
        self.total_weight += edge.weight;
        self.mst.push(edge);
        Some(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    fn final_state(graph: Graph, start: &str) -> PrimState {
        match PrimGenerator::new(graph, start.into()).last().unwrap() {
            AlgorithmState::Prim(state) => state,
            other => panic!("unexpected state {other:?}"),
        }
    }

    /// Minimum total weight over all connected spanning edge subsets, by
    /// exhaustive bitmask enumeration. Only usable on tiny graphs.
    fn brute_force_mst_weight(graph: &Graph) -> f64 {
        let nodes = graph.nodes();
        let edges = graph.edges();
        let mut best = f64::INFINITY;

        for mask in 0u32..(1 << edges.len()) {
            let chosen: Vec<&Edge> = edges
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, e)| e)
                .collect();

            // Connectivity check by flood fill from the first node.
            let mut reached = vec![nodes[0].clone()];
            loop {
                let before = reached.len();
                for edge in &chosen {
                    if reached.contains(&edge.from) && !reached.contains(&edge.to) {
                        reached.push(edge.to.clone());
                    }
                    if reached.contains(&edge.to) && !reached.contains(&edge.from) {
                        reached.push(edge.from.clone());
                    }
                }
                if reached.len() == before {
                    break;
                }
            }
            if reached.len() == nodes.len() {
                let total: f64 = chosen.iter().map(|e| e.weight).sum();
                best = best.min(total);
            }
        }
        best
    }

    #[test]
    fn init_state_is_seeded_with_start() {
        let mut gen = PrimGenerator::new(demo::prim_graph(), "A".into());
        match gen.next().unwrap() {
            AlgorithmState::Prim(state) => {
                assert_eq!(state.visited, vec![NodeId::from("A")]);
                assert!(state.mst.is_empty());
                assert_eq!(state.total_weight, 0.0);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn demo_graph_mst() {
        let state = final_state(demo::prim_graph(), "A");

        let edges: Vec<(&str, &str, f64)> = state
            .mst
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str(), e.weight))
            .collect();
        assert_eq!(
            edges,
            vec![("A", "B", 2.0), ("B", "C", 1.0), ("B", "D", 4.0)]
        );
        assert_eq!(state.total_weight, 7.0);
    }

    #[test]
    fn connected_graph_spans_all_nodes() {
        let graph = demo::prim_graph();
        let state = final_state(graph.clone(), "A");
        assert_eq!(state.mst.len(), graph.node_count() - 1);
        assert_eq!(state.visited.len(), graph.node_count());
    }

    #[test]
    fn matches_brute_force_weight() {
        let graph = demo::prim_graph();
        let state = final_state(graph.clone(), "A");
        assert_eq!(state.total_weight, brute_force_mst_weight(&graph));
    }

    #[test]
    fn disconnected_graph_terminates_with_partial_mst() {
        let mut graph = demo::prim_graph();
        graph.add_edge("X", "Y", 1.0).unwrap();

        let states: Vec<AlgorithmState> =
            PrimGenerator::new(graph.clone(), "A".into()).collect();
        // Finite: init + one per absorbed node in A's component.
        assert_eq!(states.len(), 1 + 3);

        let AlgorithmState::Prim(last) = states.last().unwrap() else {
            panic!("unexpected state");
        };
        assert!(last.mst.len() < graph.node_count() - 1);
        assert!(!last.visited.contains(&NodeId::from("X")));
    }

    #[test]
    fn weight_ties_break_by_edge_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();

        let state = final_state(graph, "A");
        assert_eq!(state.mst[0].to, NodeId::from("B"));
        assert_eq!(state.mst[1].to, NodeId::from("C"));
    }

    #[test]
    fn start_from_non_first_node() {
        let state = final_state(demo::prim_graph(), "D");
        assert_eq!(state.total_weight, 7.0);
        assert_eq!(state.mst.len(), 3);
    }
}
