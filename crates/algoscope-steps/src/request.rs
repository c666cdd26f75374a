//! Algorithm selection: run requests and the name registry.

use std::collections::BTreeMap;

use algoscope_graph::{Graph, NodeId};

use crate::bfs::BfsGenerator;
use crate::dijkstra::DijkstraGenerator;
use crate::error::{Error, Result};
use crate::heap::{HeapGenerator, HeapOp, Polarity};
use crate::prim::PrimGenerator;
use crate::sort::{
    BubbleSortGenerator, InsertionSortGenerator, SelectionSortGenerator, SortAlgorithm,
};
use crate::state::AlgorithmState;

/// A boxed lazy state sequence, ready to hand to a stepper.
pub type StateIter = Box<dyn Iterator<Item = AlgorithmState> + Send>;

/// One algorithm plus its input, owned.
///
/// Building a generator clones the input (copy-on-start), so the same
/// request can be replayed any number of times and later edits to the
/// caller's graph never leak into an in-flight run.
#[derive(Debug, Clone)]
pub enum RunRequest {
    Bfs {
        graph: Graph,
        start: NodeId,
    },
    Dijkstra {
        graph: Graph,
        start: NodeId,
    },
    Prim {
        graph: Graph,
        start: NodeId,
    },
    Heap {
        values: Vec<i64>,
        polarity: Polarity,
        ops: Vec<HeapOp>,
    },
    Sort {
        values: Vec<i64>,
        algorithm: SortAlgorithm,
    },
}

impl RunRequest {
    /// Canonical registry name for this request's algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            RunRequest::Bfs { .. } => "bfs",
            RunRequest::Dijkstra { .. } => "dijkstra",
            RunRequest::Prim { .. } => "prim",
            RunRequest::Heap { .. } => "heap",
            RunRequest::Sort {
                algorithm: SortAlgorithm::Bubble,
                ..
            } => "bubble-sort",
            RunRequest::Sort {
                algorithm: SortAlgorithm::Selection,
                ..
            } => "selection-sort",
            RunRequest::Sort {
                algorithm: SortAlgorithm::Insertion,
                ..
            } => "insertion-sort",
        }
    }

    /// Build a fresh generator over a private copy of the input.
    ///
    /// Fails with [`Error::UnknownStartNode`] before any step exists if a
    /// graph algorithm's start node is absent.
    pub fn generator(&self) -> Result<StateIter> {
        fn checked_start(graph: &Graph, start: &NodeId) -> Result<NodeId> {
            if graph.contains(start) {
                Ok(start.clone())
            } else {
                Err(Error::UnknownStartNode(start.clone()))
            }
        }

        Ok(match self {
            RunRequest::Bfs { graph, start } => Box::new(BfsGenerator::new(
                graph.clone(),
                checked_start(graph, start)?,
            )),
            RunRequest::Dijkstra { graph, start } => Box::new(DijkstraGenerator::new(
                graph.clone(),
                checked_start(graph, start)?,
            )),
            RunRequest::Prim { graph, start } => Box::new(PrimGenerator::new(
                graph.clone(),
                checked_start(graph, start)?,
            )),
            RunRequest::Heap {
                values,
                polarity,
                ops,
            } => Box::new(HeapGenerator::new(values.clone(), *polarity, ops.clone())),
            RunRequest::Sort { values, algorithm } => match algorithm {
                SortAlgorithm::Bubble => Box::new(BubbleSortGenerator::new(values.clone())),
                SortAlgorithm::Selection => Box::new(SelectionSortGenerator::new(values.clone())),
                SortAlgorithm::Insertion => Box::new(InsertionSortGenerator::new(values.clone())),
            },
        })
    }
}

/// An explicit name -> configured-request mapping.
///
/// Passed around by value instead of living in global state, so a consumer
/// wires up exactly the algorithms it wants and nothing is ambient.
#[derive(Debug, Default)]
pub struct Registry {
    requests: BTreeMap<&'static str, RunRequest>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a configured request under its canonical name, replacing
    /// any previous entry for that name.
    pub fn register(&mut self, request: RunRequest) {
        self.requests.insert(request.name(), request);
    }

    /// Build a fresh generator for the named algorithm, or `None` if the
    /// name was never registered.
    pub fn build(&self, name: &str) -> Option<Result<StateIter>> {
        self.requests.get(name).map(RunRequest::generator)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.requests.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn unknown_start_node_fails_before_first_step() {
        let request = RunRequest::Bfs {
            graph: demo::bfs_graph(),
            start: "missing".into(),
        };
        let err = match request.generator() {
            Err(err) => err,
            Ok(_) => panic!("expected UnknownStartNode"),
        };
        assert_eq!(err, Error::UnknownStartNode("missing".into()));
    }

    #[test]
    fn run_reads_a_snapshot_of_the_graph() {
        let mut graph = demo::dijkstra_graph();
        let request = RunRequest::Dijkstra {
            graph: graph.clone(),
            start: "A".into(),
        };
        let generator = request.generator().unwrap();

        // Mutating the caller's graph after construction changes nothing.
        graph.add_edge("A", "E", 1.0).unwrap();

        let last = generator.last().unwrap();
        let AlgorithmState::Dijkstra(state) = last else {
            panic!("unexpected state");
        };
        assert_eq!(state.distances[&NodeId::from("E")], Some(14.0));
    }

    #[test]
    fn registry_builds_by_name() {
        let mut registry = Registry::new();
        registry.register(RunRequest::Bfs {
            graph: demo::bfs_graph(),
            start: "A".into(),
        });
        registry.register(RunRequest::Sort {
            values: demo::SORT_INPUT.to_vec(),
            algorithm: SortAlgorithm::Bubble,
        });

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["bfs", "bubble-sort"]);

        assert!(registry.build("bfs").unwrap().is_ok());
        assert!(registry.build("quick-sort").is_none());
    }

    #[test]
    fn same_request_yields_fresh_generators() {
        let request = RunRequest::Sort {
            values: demo::SORT_INPUT.to_vec(),
            algorithm: SortAlgorithm::Insertion,
        };

        let first = request.generator().unwrap().count();
        let second = request.generator().unwrap().count();
        assert_eq!(first, second);
    }
}
