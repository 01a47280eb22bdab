use std::time::Instant;

use anyhow::ensure;
use clap::{Parser, ValueEnum};
use graph_walk_core::{AdjacencyGraph, Path, SearchConfig, Searcher, TraversalDirection};
use serde::Serialize;
use tracing::info;

mod generators;
mod logging;

use generators::{Generator, BRIDGE_LEN};

/// Benchmark DFS, BFS and Dijkstra on synthetic graphs.
#[derive(Debug, Parser)]
#[command(name = "graph-walk-bench", version)]
struct Cli {
    /// Graph generator to run
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target vertex count per generated graph
    #[arg(default_value_t = 100_000)]
    node_count: u64,

    /// Abort a search after visiting this many vertices
    #[arg(long, env = "GRAPH_WALK_MAX_VISITED")]
    max_visited: Option<usize>,

    /// Seed mixed into every generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print one JSON report per generator instead of tables
    #[arg(long)]
    json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run every generator
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense clusters connected by a thin bridge
    Barbell,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
    /// Square lattice with random weights
    Grid,
}

impl Mode {
    fn generators(self) -> Vec<(&'static str, Generator)> {
        let all: [(Mode, &'static str, Generator); 6] = [
            (Mode::Lsystem, "L-system tree", generators::gen_lsystem),
            (Mode::Smallworld, "Small-world (Watts-Strogatz)", generators::gen_small_world),
            (Mode::Random, "Erdos-Renyi random", generators::gen_random),
            (Mode::Barbell, "Barbell (cluster-bridge-cluster)", generators::gen_barbell),
            (Mode::Dla, "DLA (organic branching)", generators::gen_dla),
            (Mode::Grid, "Grid lattice", generators::gen_grid),
        ];
        all.into_iter()
            .filter(|(mode, _, _)| self == Mode::All || *mode == self)
            .map(|(_, name, generator)| (name, generator))
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct RunReport {
    generator: String,
    vertices: usize,
    edges: usize,
    generate_ms: f64,
    reachable: Option<usize>,
    searches: Vec<SearchReport>,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    algorithm: &'static str,
    found: bool,
    length: Option<usize>,
    weight: Option<f64>,
    visited: Option<usize>,
    elapsed_ms: f64,
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json)?;

    ensure!(cli.node_count >= 2, "node_count must be at least 2, got {}", cli.node_count);
    ensure!(
        !matches!(cli.mode, Mode::All | Mode::Barbell) || cli.node_count > BRIDGE_LEN + 2,
        "barbell needs node_count > {}, got {}",
        BRIDGE_LEN + 2,
        cli.node_count
    );

    let config = SearchConfig {
        max_visited: cli.max_visited,
        ..SearchConfig::default()
    };

    if !cli.json {
        println!("graph-walk-bench");
        println!("================");
        println!();
    }

    for (name, generator) in cli.mode.generators() {
        let report = run_benchmark(name, generator, &cli, config);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, cli: &Cli, config: SearchConfig) -> RunReport {
    info!(generator = name, node_count = cli.node_count, "generating");

    let t = Instant::now();
    let graph = generator(cli.node_count, cli.seed);
    let generate_ms = t.elapsed().as_secs_f64() * 1000.0;

    if !cli.json {
        println!("--- {} ---", name);
        println!(
            "Generated in {:.2}s, {} vertices, {} edges, ~{:.0}MB",
            generate_ms / 1000.0,
            graph.vertex_count(),
            graph.edge_count(),
            graph.memory_usage() as f64 / 1_048_576.0
        );
    }

    // Generators emit directed edges; search them as undirected.
    let view = graph.view(TraversalDirection::Both);
    let searcher = Searcher::new(view).with_config(config);
    let start: u64 = 0;
    let target = farthest_id(&graph);

    let reachable = searcher.reachable(&start);
    if !cli.json {
        match &reachable {
            Ok(set) => println!("Reachable from {}: {} vertices", start, set.len()),
            Err(err) => println!("Reachable from {}: aborted ({})", start, err),
        }
    }
    let reachable = reachable.ok().map(|set| set.len());

    if !cli.json {
        println!();
        println!(
            "{:>10} {:>10} {:>12} {:>12} {:>10}",
            "search", "length", "weight", "visited", "time"
        );
        println!("{:->10} {:->10} {:->12} {:->12} {:->10}", "", "", "", "", "");
    }

    let weight = |u: &u64, v: &u64| view.edge_weight(u, v).unwrap_or(f64::NAN);
    let mut searches = Vec::with_capacity(3);

    let t = Instant::now();
    let dfs = searcher.depth_first(&start, &target);
    searches.push(report("dfs", dfs, t, weight));

    let t = Instant::now();
    let bfs = searcher.breadth_first(&start, &target);
    searches.push(report("bfs", bfs, t, weight));

    let t = Instant::now();
    let dijkstra = searcher.dijkstra(&start, &target, weight);
    searches.push(report("dijkstra", dijkstra, t, weight));

    if !cli.json {
        for s in &searches {
            print_row(s);
        }
        println!();
    }

    RunReport {
        generator: name.to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        generate_ms,
        reachable,
        searches,
    }
}

/// The highest vertex id; generators number vertices densely from 0.
fn farthest_id(graph: &AdjacencyGraph<u64>) -> u64 {
    graph.vertices().iter().copied().max().unwrap_or(0)
}

fn report<F>(
    algorithm: &'static str,
    result: graph_walk_core::Result<Option<Path<u64>>>,
    started: Instant,
    weight: F,
) -> SearchReport
where
    F: FnMut(&u64, &u64) -> f64,
{
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    match result {
        Ok(Some(mut path)) => {
            // DFS and BFS paths carry no weight until measured
            path.recalculate_total_weight(weight);
            SearchReport {
                algorithm,
                found: true,
                length: Some(path.edge_count()),
                weight: Some(path.total_weight()),
                visited: Some(path.visited().len()),
                elapsed_ms,
                error: None,
            }
        }
        Ok(None) => SearchReport {
            algorithm,
            found: false,
            length: None,
            weight: None,
            visited: None,
            elapsed_ms,
            error: None,
        },
        Err(err) => SearchReport {
            algorithm,
            found: false,
            length: None,
            weight: None,
            visited: None,
            elapsed_ms,
            error: Some(err.to_string()),
        },
    }
}

fn print_row(s: &SearchReport) {
    match (&s.error, s.length, s.weight, s.visited) {
        (Some(err), _, _, _) => {
            println!("{:>10} aborted: {} ({:.1}ms)", s.algorithm, err, s.elapsed_ms)
        }
        (None, Some(length), Some(weight), Some(visited)) => println!(
            "{:>10} {:>10} {:>12.2} {:>12} {:>8.1}ms",
            s.algorithm, length, weight, visited, s.elapsed_ms
        ),
        _ => println!("{:>10} no path ({:.1}ms)", s.algorithm, s.elapsed_ms),
    }
}
