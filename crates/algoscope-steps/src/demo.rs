//! Canonical demo inputs.
//!
//! The graphs and array every algoscope frontend ships with; tests use
//! them as known-answer fixtures.

use algoscope_graph::Graph;

/// The demo sorting input. Sorts to `[2, 3, 4, 5, 8]`.
pub const SORT_INPUT: [i64; 5] = [5, 3, 8, 4, 2];

/// Five-node weighted digraph for Dijkstra. From `A` the shortest
/// distances are `A:0, B:3, C:2, D:8, E:14`.
pub fn dijkstra_graph() -> Graph {
    let mut graph = Graph::new();
    for (from, to, weight) in [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("C", "B", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("D", "E", 6.0),
    ] {
        graph
            .add_edge(from, to, weight)
            .expect("demo weights are valid");
    }
    graph
}

/// Six-node unweighted graph for BFS; from `A` the traversal order is
/// `A B C D E F`.
pub fn bfs_graph() -> Graph {
    let mut graph = Graph::new();
    for (from, to) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("B", "E"),
        ("C", "F"),
        ("E", "F"),
    ] {
        graph.add_edge(from, to, 1.0).expect("demo weights are valid");
    }
    graph
}

/// Four-node undirected weighted graph for Prim. The MST from any start
/// weighs 7.
pub fn prim_graph() -> Graph {
    let mut graph = Graph::new();
    for (from, to, weight) in [
        ("A", "B", 2.0),
        ("A", "C", 3.0),
        ("B", "C", 1.0),
        ("B", "D", 4.0),
        ("C", "D", 5.0),
    ] {
        graph
            .add_edge(from, to, weight)
            .expect("demo weights are valid");
    }
    graph
}
