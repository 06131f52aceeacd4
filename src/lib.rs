//! GraphPath - random weighted-graph generation and shortest-path solvers
//!
//! This crate provides the algorithmic core behind a graph visualizer:
//! generation of random weighted directed graphs (general or acyclic) and
//! two single-source shortest-path solvers. Dijkstra handles non-negative
//! weights; Bellman-Ford tolerates negative weights and rejects graphs
//! with reachable negative cycles.
//!
//! Data flows one way: [`GraphGenerator`] produces a [`Graph`], a solver
//! turns it into a [`PathResult`], and the caller renders or measures the
//! outcome. Every call is pure given its inputs; generation consumes only
//! the random generator the caller passes in.

pub mod bellman_ford;
pub mod config;
pub mod dijkstra;
pub mod error;
pub mod generate;
pub mod graph;
pub mod logging;

pub use bellman_ford::BellmanFord;
pub use config::Config;
pub use dijkstra::Dijkstra;
pub use error::{AlgorithmError, AlgorithmResult};
pub use generate::GraphGenerator;
pub use graph::{Edge, Graph, PathResult};
