//! Node, edge, and graph storage.

use std::fmt;

use crate::error::{Error, Result};

/// A node label, unique within a graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node id from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A weighted edge between two nodes.
///
/// Interpreted as directed (`from -> to`) or undirected depending on the
/// algorithm consuming it; the storage is the same either way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// A mutable node/edge set with insertion-ordered iteration.
///
/// Invariant: every edge's endpoints exist in the node set. `add_edge`
/// enforces this by implicitly adding absent endpoints.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. No-op if the label is already present.
    pub fn add_node(&mut self, label: impl Into<NodeId>) {
        let node = label.into();
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    /// Add an edge, implicitly adding absent endpoints.
    ///
    /// Parallel edges between the same pair are permitted. Fails with
    /// [`Error::InvalidWeight`] if the weight is NaN, infinite, or negative;
    /// the graph is left unchanged in that case.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: f64,
    ) -> Result<()> {
        let from = from.into();
        let to = to.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { from, to, weight });
        }
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.edges.push(Edge { from, to, weight });
        Ok(())
    }

    /// Whether a node is present.
    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of `node` with edge weights, in edge-insertion order.
    ///
    /// With `directed = true` only edges leaving `node` are included; with
    /// `directed = false` edges are traversable from either endpoint. A
    /// parallel edge contributes one pair per occurrence.
    pub fn neighbors<'a>(
        &'a self,
        node: &'a NodeId,
        directed: bool,
    ) -> impl Iterator<Item = (&'a NodeId, f64)> + 'a {
        self.edges.iter().filter_map(move |edge| {
            if edge.from == *node {
                Some((&edge.to, edge.weight))
            } else if !directed && edge.to == *node {
                Some((&edge.from, edge.weight))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_node("A");
        graph.add_node("B");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes(), [NodeId::from("A"), NodeId::from("B")]);
    }

    #[test]
    fn add_edge_creates_absent_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0).unwrap();

        assert!(graph.contains(&NodeId::from("A")));
        assert!(graph.contains(&NodeId::from("B")));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn parallel_edges_are_independent() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0).unwrap();
        graph.add_edge("A", "B", 7.0).unwrap();

        let weights: Vec<f64> = graph
            .neighbors(&NodeId::from("A"), true)
            .map(|(_, w)| w)
            .collect();
        assert_eq!(weights, vec![4.0, 7.0]);
    }

    #[test]
    fn rejects_malformed_weights() {
        let mut graph = Graph::new();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let err = graph.add_edge("A", "B", bad).unwrap_err();
            assert!(matches!(err, Error::InvalidWeight { .. }));
        }

        // Rejected edges leave no trace, not even implicit nodes.
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn zero_weight_is_valid() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("A", "B", 0.0).is_ok());
    }

    #[test]
    fn neighbors_respects_direction() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("C", "A", 2.0).unwrap();

        let a = NodeId::from("A");

        let directed: Vec<&NodeId> = graph.neighbors(&a, true).map(|(n, _)| n).collect();
        assert_eq!(directed, vec![&NodeId::from("B")]);

        let undirected: Vec<&NodeId> = graph.neighbors(&a, false).map(|(n, _)| n).collect();
        assert_eq!(undirected, vec![&NodeId::from("B"), &NodeId::from("C")]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("C", "A", 1.0).unwrap();
        graph.add_edge("B", "A", 1.0).unwrap();
        graph.add_node("Z");

        let labels: Vec<&str> = graph.nodes().iter().map(NodeId::as_str).collect();
        assert_eq!(labels, vec!["C", "A", "B", "Z"]);
    }
}
