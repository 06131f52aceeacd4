//! Unified error handling for graphpath
//!
//! All generation and solver failures are reported synchronously through
//! [`AlgorithmError`]; no partial graph or path is ever returned. An
//! unreachable target is not an error, it is encoded in the result type
//! (see [`crate::graph::PathResult`]).

use thiserror::Error;

/// Errors produced by graph generation and the shortest-path solvers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("graph must contain at least one node, got {0}")]
    InvalidNodeCount(usize),

    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("invalid weight range: minimum {min} exceeds maximum {max}")]
    InvalidWeightRange { min: i64, max: i64 },

    #[error("average degree {avg_degree} cannot be satisfied with {num_nodes} nodes")]
    DegreeTooLarge { avg_degree: usize, num_nodes: usize },

    #[error("gave up after {attempts} attempts to find a new distinct edge")]
    EdgeSpaceExhausted { attempts: usize },

    #[error("a negative cycle is reachable from node {source}")]
    NegativeCycle { r#source: usize },
}

/// Unified result type for all graphpath operations
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
