//! Benchmark harness for the shortest-path solvers
//!
//! Times Dijkstra and Bellman-Ford over randomly generated graphs of
//! increasing size and prints the results as a table: first both solvers
//! on general directed graphs, then Bellman-Ford alone on directed
//! acyclic graphs with negative weights.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Instant;

use graphpath::{logging, BellmanFord, Config, Dijkstra, GraphGenerator};

#[derive(Parser)]
#[clap(
    version = "0.1.0",
    author = "GraphPath Contributors",
    about = "Benchmark Dijkstra and Bellman-Ford over random graphs"
)]
struct Cli {
    /// Graph sizes to benchmark; config defaults are used when omitted
    #[clap(short, long)]
    nodes: Vec<usize>,

    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: String,

    /// Seed for the random generator; entropy-seeded when omitted
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    logging::init(&config)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let node_counts = if cli.nodes.is_empty() {
        config.benchmark_node_counts.clone()
    } else {
        cli.nodes.clone()
    };

    // Benchmark 1: both solvers on general directed graphs
    println!("| Nodes     | Dijkstra Time (s)   | Bellman-Ford Time (s) |");
    println!("|-----------|---------------------|-----------------------|");
    for &num_nodes in &node_counts {
        let graph = GraphGenerator::directed(
            num_nodes,
            config.benchmark_avg_degree,
            config.directed_min_weight,
            config.directed_max_weight,
            &mut rng,
        )?;
        let source = 0;
        let target = num_nodes - 1;

        let start = Instant::now();
        Dijkstra::shortest_path(&graph, source, target)?;
        let dijkstra_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        BellmanFord::shortest_path(&graph, source, target)?;
        let bellman_secs = start.elapsed().as_secs_f64();

        log::info!(
            "directed graph with {} nodes, {} edges: dijkstra {:.6}s, bellman-ford {:.6}s",
            num_nodes,
            graph.edge_count(),
            dijkstra_secs,
            bellman_secs
        );
        println!(
            "| {:<10}| {:<20.6}| {:<22.6}|",
            num_nodes, dijkstra_secs, bellman_secs
        );
    }

    println!();
    println!();

    // Benchmark 2: Bellman-Ford on acyclic graphs with negative weights
    println!("| Nodes     | Bellman-Ford Time (s) |");
    println!("|-----------|-----------------------|");
    for &num_nodes in &node_counts {
        let graph = GraphGenerator::acyclic(
            num_nodes,
            config.benchmark_avg_degree,
            config.acyclic_min_weight,
            config.acyclic_max_weight,
            &mut rng,
        )?;
        let source = 0;
        let target = num_nodes - 1;

        let start = Instant::now();
        BellmanFord::shortest_path(&graph, source, target)?;
        let bellman_secs = start.elapsed().as_secs_f64();

        log::info!(
            "acyclic graph with {} nodes, {} edges: bellman-ford {:.6}s",
            num_nodes,
            graph.edge_count(),
            bellman_secs
        );
        println!("| {:<10}| {:<22.6}|", num_nodes, bellman_secs);
    }

    logging::shutdown();
    Ok(())
}
