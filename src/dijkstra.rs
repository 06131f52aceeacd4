//! Dijkstra's algorithm
//!
//! Single-source, single-target shortest path over graphs with
//! non-negative edge weights.

use crate::error::AlgorithmResult;
use crate::graph::{Graph, PathResult};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Dijkstra shortest-path solver
pub struct Dijkstra;

/// Priority-queue entry keyed by tentative distance
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct NodeDistance {
    node: usize,
    distance: i64,
}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering to turn the max-heap into a min-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// Compute the shortest path from `source` to `target`
    ///
    /// Precondition: every edge weight in `graph` is non-negative. This is
    /// the caller's responsibility and is not checked; negative weights
    /// silently produce wrong answers (use
    /// [`crate::BellmanFord::shortest_path`] instead).
    ///
    /// An unreachable target is not an error: the returned [`PathResult`]
    /// carries an empty path and no distance. `source == target` yields the
    /// single-node path with distance 0.
    pub fn shortest_path(
        graph: &Graph,
        source: usize,
        target: usize,
    ) -> AlgorithmResult<PathResult> {
        graph.check_node(source)?;
        graph.check_node(target)?;

        let num_nodes = graph.num_nodes();
        let mut distances: Vec<Option<i64>> = vec![None; num_nodes];
        let mut predecessors: Vec<Option<usize>> = vec![None; num_nodes];
        let mut queue: BinaryHeap<NodeDistance> = BinaryHeap::new();

        distances[source] = Some(0);
        queue.push(NodeDistance {
            node: source,
            distance: 0,
        });

        while let Some(NodeDistance { node, distance }) = queue.pop() {
            // Stale entry superseded by an earlier relaxation
            match distances[node] {
                Some(best) if distance > best => continue,
                _ => {}
            }

            for edge in graph.neighbors(node) {
                let candidate = distance + edge.weight;
                let improves = match distances[edge.to] {
                    Some(best) => candidate < best,
                    None => true,
                };

                if improves {
                    distances[edge.to] = Some(candidate);
                    predecessors[edge.to] = Some(node);
                    queue.push(NodeDistance {
                        node: edge.to,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(PathResult::from_search(target, &distances, &predecessors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_weighted_graph() -> Graph {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 2);
        graph.add_edge(1, 2, 1);
        graph.add_edge(1, 3, 5);
        graph.add_edge(2, 3, 8);
        graph
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_weighted_graph();
        let result = Dijkstra::shortest_path(&graph, 0, 3)
            .expect("Solver should succeed in test");

        assert_eq!(result.path, vec![0, 1, 3]);
        assert_eq!(result.distance, Some(9));
    }

    #[test]
    fn test_longer_path_can_be_shorter() {
        // Direct edge 0->3 loses to the detour through 2 and 1
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 1);
        graph.add_edge(2, 1, 2);
        graph.add_edge(1, 3, 1);
        graph.add_edge(2, 3, 5);

        let result = Dijkstra::shortest_path(&graph, 0, 3)
            .expect("Solver should succeed in test");
        assert_eq!(result.path, vec![0, 2, 1, 3]);
        assert_eq!(result.distance, Some(4));
    }

    #[test]
    fn test_unreachable_target() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 4);

        let result = Dijkstra::shortest_path(&graph, 0, 2)
            .expect("Solver should succeed in test");
        assert!(result.path.is_empty());
        assert_eq!(result.distance, None);
    }

    #[test]
    fn test_same_node() {
        let graph = create_weighted_graph();
        let result = Dijkstra::shortest_path(&graph, 1, 1)
            .expect("Solver should succeed in test");

        assert_eq!(result.path, vec![1]);
        assert_eq!(result.distance, Some(0));
    }

    #[test]
    fn test_node_out_of_range() {
        let graph = create_weighted_graph();
        let result = Dijkstra::shortest_path(&graph, 0, 4);
        assert_eq!(
            result,
            Err(crate::error::AlgorithmError::NodeOutOfRange {
                node: 4,
                num_nodes: 4
            })
        );
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 0);
        graph.add_edge(1, 2, 0);

        let result = Dijkstra::shortest_path(&graph, 0, 2)
            .expect("Solver should succeed in test");
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.distance, Some(0));
    }
}
