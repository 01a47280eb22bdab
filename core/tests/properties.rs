use std::collections::{HashMap, HashSet};

use graph_walk_core::{
    all_vertices, breadth_first_search, depth_first_search, dijkstra_shortest_path,
    format_adjacency_list, AdjacencyGraph,
};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

/// The same random digraph in both representations.
struct Fixture {
    graph: AdjacencyGraph<usize>,
    reference: DiGraph<(), f64>,
    nodes: Vec<NodeIndex>,
}

fn build(n: usize, edges: &[(usize, usize, u32)]) -> Fixture {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut reference = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..n)
        .map(|v| {
            graph.add_vertex(v);
            reference.add_node(())
        })
        .collect();

    for &(from, to, weight) in edges {
        // Parallel edges are dropped by AdjacencyGraph; keep petgraph in step
        if graph.add_weighted_edge(from, to, f64::from(weight)) {
            reference.add_edge(nodes[from], nodes[to], f64::from(weight));
        }
    }

    Fixture {
        graph,
        reference,
        nodes,
    }
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>, usize)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0u32..20), 0..40),
            0..n,
        )
    })
}

impl Fixture {
    fn hop_distances(&self, start: usize) -> HashMap<usize, usize> {
        petgraph::algo::dijkstra(&self.reference, self.nodes[start], None, |_| 1usize)
            .into_iter()
            .map(|(node, d)| (node.index(), d))
            .collect()
    }

    fn weighted_distances(&self, start: usize) -> HashMap<usize, f64> {
        petgraph::algo::dijkstra(&self.reference, self.nodes[start], None, |e| *e.weight())
            .into_iter()
            .map(|(node, d)| (node.index(), d))
            .collect()
    }

    fn weight(&self, u: &usize, v: &usize) -> f64 {
        self.graph.edge_weight(u, v).unwrap_or(f64::NAN)
    }
}

proptest! {
    #[test]
    fn test_reachability_matches_reference((n, edges, start) in graph_strategy()) {
        let fx = build(n, &edges);
        let reached = all_vertices(&fx.graph, &start);
        let expected: HashSet<usize> = fx.hop_distances(start).into_keys().collect();

        prop_assert!(reached.contains(&start));
        prop_assert_eq!(reached, expected);
    }

    #[test]
    fn test_adjacency_list_lists_each_reachable_vertex_once((n, edges, start) in graph_strategy()) {
        let fx = build(n, &edges);
        let text = format_adjacency_list(&fx.graph, &start);
        let rendered: Vec<usize> = text
            .lines()
            .skip(1)
            .filter_map(|line| line.split(':').next())
            .filter_map(|v| v.parse().ok())
            .collect();
        let unique: HashSet<usize> = rendered.iter().copied().collect();

        prop_assert_eq!(rendered.first().copied(), Some(start));
        prop_assert_eq!(unique.len(), rendered.len());
        prop_assert_eq!(unique, all_vertices(&fx.graph, &start));
    }

    #[test]
    fn test_bfs_has_fewest_edges((n, edges, start) in graph_strategy()) {
        let fx = build(n, &edges);
        let hops = fx.hop_distances(start);

        for target in 0..n {
            let path = breadth_first_search(&fx.graph, &start, &target);
            match hops.get(&target) {
                None => prop_assert!(path.is_none()),
                Some(&expected) => {
                    let path = path.expect("reachable target has a path");
                    prop_assert_eq!(path.edge_count(), expected);
                    prop_assert_eq!(path.start(), Some(&start));
                    prop_assert_eq!(path.target(), Some(&target));
                    prop_assert!(path.is_valid_in(&fx.graph));
                    prop_assert!(path.visited().len() >= path.len());
                }
            }
        }
    }

    #[test]
    fn test_dijkstra_has_least_weight((n, edges, start) in graph_strategy()) {
        let fx = build(n, &edges);
        let distances = fx.weighted_distances(start);

        for target in 0..n {
            let path = dijkstra_shortest_path(&fx.graph, &start, &target, |u, v| fx.weight(u, v));
            match distances.get(&target) {
                None => prop_assert!(path.is_none()),
                Some(&expected) => {
                    let path = path.expect("reachable target has a path");
                    // Integer weights: sums are exact
                    prop_assert_eq!(path.total_weight(), expected);
                    prop_assert_eq!(path.start(), Some(&start));
                    prop_assert_eq!(path.target(), Some(&target));
                    prop_assert!(path.is_valid_in(&fx.graph));
                    prop_assert!(path.visited().len() >= path.len());
                }
            }
        }
    }

    #[test]
    fn test_dfs_finds_simple_path_iff_reachable((n, edges, start) in graph_strategy()) {
        let fx = build(n, &edges);
        let reachable = all_vertices(&fx.graph, &start);

        for target in 0..n {
            let path = depth_first_search(&fx.graph, &start, &target);
            prop_assert_eq!(path.is_some(), reachable.contains(&target));
            if let Some(path) = path {
                let distinct: HashSet<&usize> = path.vertices().iter().collect();
                prop_assert_eq!(distinct.len(), path.len());
                prop_assert_eq!(path.target(), Some(&target));
                prop_assert!(path.is_valid_in(&fx.graph));
                prop_assert!(path.vertices().iter().all(|v| path.visited().contains(v)));
            }
        }
    }

    #[test]
    fn test_same_vertex_is_single_vertex_path((n, edges, start) in graph_strategy()) {
        let fx = build(n, &edges);
        let dfs = depth_first_search(&fx.graph, &start, &start);
        let bfs = breadth_first_search(&fx.graph, &start, &start);
        let dijkstra = dijkstra_shortest_path(&fx.graph, &start, &start, |u, v| fx.weight(u, v));

        for path in [dfs, bfs, dijkstra] {
            let path = path.expect("start reaches itself");
            prop_assert_eq!(path.vertices(), &[start][..]);
            prop_assert_eq!(path.total_weight(), 0.0);
        }
    }
}
