//! Bellman-Ford algorithm
//!
//! Single-source, single-target shortest path tolerant of negative edge
//! weights. A graph where relaxation is still possible after `n - 1`
//! passes contains a negative cycle and is rejected with an error instead
//! of returning a misleading path.

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::graph::{Graph, PathResult};

/// Bellman-Ford shortest-path solver
pub struct BellmanFord;

impl BellmanFord {
    /// Compute the shortest path from `source` to `target`
    ///
    /// Performs up to `num_nodes - 1` full relaxation passes over every
    /// edge, stopping early once a pass changes nothing. A final
    /// verification pass turns any remaining relaxable edge into
    /// [`AlgorithmError::NegativeCycle`].
    ///
    /// Result construction matches [`crate::Dijkstra::shortest_path`]:
    /// unreachable targets yield an empty path with no distance,
    /// `source == target` yields the single-node path with distance 0.
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

        distances[source] = Some(0);

        for _ in 0..num_nodes.saturating_sub(1) {
            let mut updated = false;

            for (from, edge) in graph.edges() {
                let dist_from = match distances[from] {
                    Some(d) => d,
                    None => continue,
                };

                let candidate = dist_from + edge.weight;
                let improves = match distances[edge.to] {
                    Some(best) => candidate < best,
                    None => true,
                };

                if improves {
                    distances[edge.to] = Some(candidate);
                    predecessors[edge.to] = Some(from);
                    updated = true;
                }
            }

            if !updated {
                break;
            }
        }

        // Verification pass: an edge that still relaxes means a negative
        // cycle is reachable from the source
        for (from, edge) in graph.edges() {
            if let Some(dist_from) = distances[from] {
                let still_improves = match distances[edge.to] {
                    Some(best) => dist_from + edge.weight < best,
                    None => true,
                };
                if still_improves {
                    return Err(AlgorithmError::NegativeCycle { source });
                }
            }
        }

        Ok(PathResult::from_search(target, &distances, &predecessors))
    }
}
