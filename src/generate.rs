//! Random graph generation
//!
//! Produces weighted directed graphs (general or acyclic) as adjacency
//! lists. Randomness is always injected by the caller, so generation is
//! deterministic under a seeded generator and safe to run concurrently
//! with distinct generators.

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::graph::Graph;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Node count at or below which the acyclic generator enumerates the full
/// `u < v` pair space instead of rejection sampling. Full enumeration is
/// O(n^2) and only tractable for small n.
const SMALL_GRAPH_LIMIT: usize = 10;

/// Consecutive rejected samples tolerated per edge, scaled by node count.
/// The hardest legal case (one edge left at full density) succeeds with
/// probability about 1/n per sample, so this budget only trips on inputs
/// where the edge space is effectively exhausted.
const MISS_FACTOR: usize = 100;

/// Random graph generator
pub struct GraphGenerator;

impl GraphGenerator {
    /// Generate a general weighted directed graph
    ///
    /// Every node receives exactly `avg_degree` outgoing edges, sampled
    /// uniformly over destinations and weights. No self-loops and no
    /// duplicate `(from, to)` pairs are produced.
    ///
    /// Fails with [`AlgorithmError::DegreeTooLarge`] when `avg_degree`
    /// exceeds `num_nodes - 1`, since that many distinct destinations do
    /// not exist.
    pub fn directed<R: Rng>(
        num_nodes: usize,
        avg_degree: usize,
        min_weight: i64,
        max_weight: i64,
        rng: &mut R,
    ) -> AlgorithmResult<Graph> {
        Self::validate(num_nodes, min_weight, max_weight)?;
        if avg_degree > num_nodes.saturating_sub(1) {
            return Err(AlgorithmError::DegreeTooLarge {
                avg_degree,
                num_nodes,
            });
        }

        let mut graph = Graph::new(num_nodes);
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let miss_budget = MISS_FACTOR * num_nodes;

        for from in 0..num_nodes {
            let mut remaining = avg_degree;
            let mut misses = 0;

            while remaining > 0 {
                let to = rng.gen_range(0..num_nodes);

                // Reject self-loops and duplicate (from, to) pairs
                if to == from || !seen.insert((from, to)) {
                    misses += 1;
                    if misses > miss_budget {
                        return Err(AlgorithmError::EdgeSpaceExhausted { attempts: misses });
                    }
                    continue;
                }

                let weight = rng.gen_range(min_weight..=max_weight);
                graph.add_edge(from, to, weight);
                remaining -= 1;
                misses = 0;
            }
        }

        Ok(graph)
    }

    /// Generate a weighted directed acyclic graph
    ///
    /// Acyclicity is guaranteed structurally: every edge `(u, v)` satisfies
    /// `u < v`, so node indices are already a topological order. Weights may
    /// be negative.
    ///
    /// Small graphs (`num_nodes <= 10`) enumerate and shuffle the whole pair
    /// space, then keep the first `avg_degree * num_nodes` pairs. Larger
    /// graphs first give every node `i >= 1` one incoming edge from a random
    /// `j < i` (so every node is reachable within the DAG), then fill up with
    /// rejection-sampled random pairs. The requested edge count is capped at
    /// the size of the pair space in both regimes.
    pub fn acyclic<R: Rng>(
        num_nodes: usize,
        avg_degree: usize,
        min_weight: i64,
        max_weight: i64,
        rng: &mut R,
    ) -> AlgorithmResult<Graph> {
        Self::validate(num_nodes, min_weight, max_weight)?;

        let total_pairs = num_nodes * (num_nodes - 1) / 2;
        let target_edges = avg_degree.saturating_mul(num_nodes).min(total_pairs);
        let mut graph = Graph::new(num_nodes);

        if num_nodes <= SMALL_GRAPH_LIMIT {
            let mut pairs = Vec::with_capacity(total_pairs);
            for u in 0..num_nodes {
                for v in (u + 1)..num_nodes {
                    pairs.push((u, v));
                }
            }
            pairs.shuffle(rng);

            // Pairs are distinct by construction, no duplicate check needed
            for &(u, v) in pairs.iter().take(target_edges) {
                let weight = rng.gen_range(min_weight..=max_weight);
                graph.add_edge(u, v, weight);
            }
            return Ok(graph);
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        // Connectivity pass: one incoming edge for every node after the
        // first. Each target is visited once, but the duplicate check stays
        // so the fill pass below cannot double an edge either way.
        for to in 1..num_nodes {
            let from = rng.gen_range(0..to);
            if seen.insert((from, to)) {
                let weight = rng.gen_range(min_weight..=max_weight);
                graph.add_edge(from, to, weight);
            }
        }

        // Fill pass: random u < v pairs until the target edge count
        let miss_budget = MISS_FACTOR * num_nodes;
        let mut edge_count = graph.edge_count();
        let mut misses = 0;

        while edge_count < target_edges {
            let u = rng.gen_range(0..num_nodes - 1);
            let v = rng.gen_range(u + 1..num_nodes);

            if !seen.insert((u, v)) {
                misses += 1;
                if misses > miss_budget {
                    return Err(AlgorithmError::EdgeSpaceExhausted { attempts: misses });
                }
                continue;
            }

            let weight = rng.gen_range(min_weight..=max_weight);
            graph.add_edge(u, v, weight);
            edge_count += 1;
            misses = 0;
        }

        Ok(graph)
    }

    /// [`GraphGenerator::directed`] with thread-local entropy for callers
    /// that do not need reproducibility
    pub fn directed_with_entropy(
        num_nodes: usize,
        avg_degree: usize,
        min_weight: i64,
        max_weight: i64,
    ) -> AlgorithmResult<Graph> {
        Self::directed(
            num_nodes,
            avg_degree,
            min_weight,
            max_weight,
            &mut rand::thread_rng(),
        )
    }

    /// [`GraphGenerator::acyclic`] with thread-local entropy
    pub fn acyclic_with_entropy(
        num_nodes: usize,
        avg_degree: usize,
        min_weight: i64,
        max_weight: i64,
    ) -> AlgorithmResult<Graph> {
        Self::acyclic(
            num_nodes,
            avg_degree,
            min_weight,
            max_weight,
            &mut rand::thread_rng(),
        )
    }

    fn validate(num_nodes: usize, min_weight: i64, max_weight: i64) -> AlgorithmResult<()> {
        if num_nodes < 1 {
            return Err(AlgorithmError::InvalidNodeCount(num_nodes));
        }
        if min_weight > max_weight {
            return Err(AlgorithmError::InvalidWeightRange {
                min: min_weight,
                max: max_weight,
            });
        }
        Ok(())
    }
}
