//! Graph data model
//!
//! Weighted directed graph stored as per-node adjacency lists, plus the
//! result type returned by the shortest-path solvers.

use crate::error::{AlgorithmError, AlgorithmResult};
use serde::{Deserialize, Serialize};

/// A directed edge with a weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the destination node
    pub to: usize,
    /// Weight of the edge
    pub weight: i64,
}

/// Weighted directed graph
///
/// Nodes are identified solely by their zero-based index; `adjacency[u]`
/// holds the outgoing edges of node `u`. Graphs are built once (by the
/// generator or by tests) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_nodes` nodes and no edges
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges over all adjacency lists
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|list| list.len()).sum()
    }

    /// Add a directed edge `from -> to`
    ///
    /// Uniqueness and self-loop avoidance are the generator's concern;
    /// this method only appends.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) {
        self.adjacency[from].push(Edge { to, weight });
    }

    /// Outgoing edges of `node`
    pub fn neighbors(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Iterate over all edges as `(from, edge)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (usize, Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| list.iter().map(move |&edge| (from, edge)))
    }

    pub(crate) fn check_node(&self, node: usize) -> AlgorithmResult<()> {
        if node >= self.num_nodes() {
            return Err(AlgorithmError::NodeOutOfRange {
                node,
                num_nodes: self.num_nodes(),
            });
        }
        Ok(())
    }
}

/// Result of a single-source, single-target shortest-path query
///
/// Constructed fresh by each solver call and owned by the caller. An
/// unreachable target is represented by an empty path and `distance: None`;
/// no numeric sentinel value is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Node indices from source to target inclusive; empty when unreachable
    pub path: Vec<usize>,
    /// Sum of edge weights along `path`; `None` when the target is unreachable
    pub distance: Option<i64>,
}

impl PathResult {
    /// Whether the target was reachable from the source
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Build a result from the distance and predecessor arrays a solver
    /// produced, walking predecessors back from `target`
    pub(crate) fn from_search(
        target: usize,
        distances: &[Option<i64>],
        predecessors: &[Option<usize>],
    ) -> Self {
        let total = match distances[target] {
            Some(total) => total,
            None => {
                return Self {
                    path: Vec::new(),
                    distance: None,
                }
            }
        };

        let mut path = vec![target];
        let mut current = target;
        while let Some(predecessor) = predecessors[current] {
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();

        Self {
            path,
            distance: Some(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(4);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_add_edge_and_neighbors() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 2);
        graph.add_edge(1, 2, -1);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(0).len(), 2);
        assert_eq!(graph.neighbors(0)[0], Edge { to: 1, weight: 4 });
        assert_eq!(graph.neighbors(2).len(), 0);
    }

    #[test]
    fn test_edges_iterator() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 2, 2);
        graph.add_edge(0, 2, 3);

        let edges: Vec<(usize, Edge)> = graph.edges().collect();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&(1, Edge { to: 2, weight: 2 })));
    }

    #[test]
    fn test_check_node() {
        let graph = Graph::new(2);
        assert!(graph.check_node(1).is_ok());
        assert_eq!(
            graph.check_node(2),
            Err(AlgorithmError::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
    }

    #[test]
    fn test_path_result_from_search() {
        // 0 -> 1 -> 2 with distances 0, 3, 5
        let distances = vec![Some(0), Some(3), Some(5)];
        let predecessors = vec![None, Some(0), Some(1)];

        let result = PathResult::from_search(2, &distances, &predecessors);
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.distance, Some(5));
        assert!(result.is_reachable());
    }

    #[test]
    fn test_path_result_unreachable() {
        let distances = vec![Some(0), None];
        let predecessors = vec![None, None];

        let result = PathResult::from_search(1, &distances, &predecessors);
        assert!(result.path.is_empty());
        assert_eq!(result.distance, None);
        assert!(!result.is_reachable());
    }
}
