use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_walk_core::{
    all_vertices, breadth_first_search, depth_first_search, dijkstra_shortest_path,
    AdjacencyGraph,
};

/// Undirected `side` x `side` lattice with deterministic weights in 1..=9.
fn grid(side: u64) -> AdjacencyGraph<u64> {
    let mut g = AdjacencyGraph::with_capacity((side * side) as usize);
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            if c + 1 < side {
                g.add_undirected_edge(id, id + 1, (1 + id * 7 % 9) as f64);
            }
            if r + 1 < side {
                g.add_undirected_edge(id, id + side, (1 + id * 13 % 9) as f64);
            }
        }
    }
    g
}

fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_corner_to_corner");

    for side in [32u64, 128] {
        let g = grid(side);
        let target = side * side - 1;

        group.bench_with_input(BenchmarkId::new("reachability", side), &g, |b, g| {
            b.iter(|| black_box(all_vertices(g, &0)))
        });
        group.bench_with_input(BenchmarkId::new("dfs", side), &g, |b, g| {
            b.iter(|| black_box(depth_first_search(g, &0, &target)))
        });
        group.bench_with_input(BenchmarkId::new("bfs", side), &g, |b, g| {
            b.iter(|| black_box(breadth_first_search(g, &0, &target)))
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &g, |b, g| {
            b.iter(|| {
                black_box(dijkstra_shortest_path(g, &0, &target, |u, v| {
                    g.edge_weight(u, v).unwrap_or(f64::NAN)
                }))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_searches);
criterion_main!(benches);
