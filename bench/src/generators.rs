//! Synthetic graph generators. All are O(n) or O(n + edges), single-threaded,
//! deterministic for a given seed. Edges are directed with weights in 1..=9;
//! the driver searches them undirected.

use std::collections::VecDeque;

use graph_walk_core::AdjacencyGraph;

/// Simple LCG for deterministic, fast pseudo-random numbers.
pub struct FastRng(u64);

impl FastRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    pub fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Edge weight in 1..=9.
    pub fn weight(&mut self) -> f64 {
        (1 + self.next(9)) as f64
    }
}

pub type Generator = fn(u64, u64) -> AdjacencyGraph<u64>;

/// Fractal tree: each vertex spawns three children.
///
/// Produces deep paths (log depth) with exponential width. Exercises deep
/// DFS backtracking and path reconstruction.
pub fn gen_lsystem(node_count: u64, seed: u64) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 42);

    let branching = 3u64;
    graph.add_vertex(0);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_weighted_edge(parent, child, rng.weight());
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex links to its K forward neighbors on a ring; each link is
/// rewired to a random vertex with probability p. High clustering, short
/// paths.
pub fn gen_small_world(node_count: u64, seed: u64) -> AdjacencyGraph<u64> {
    let k = 10u64;
    let p = 0.05f64;
    let mut graph = AdjacencyGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 67890);

    for i in 0..node_count {
        graph.add_vertex(i);
    }

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let weight = rng.weight();

            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                let to = if rewired != i { rewired } else { neighbor };
                graph.add_weighted_edge(i, to, weight);
            } else {
                graph.add_weighted_edge(i, neighbor, weight);
            }
        }
    }

    graph
}

/// Erdos-Renyi: ~10 uniform random edges per vertex, no structure.
pub fn gen_random(node_count: u64, seed: u64) -> AdjacencyGraph<u64> {
    let target_edges = node_count * 10;
    let mut graph = AdjacencyGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 54321);

    for i in 0..node_count {
        graph.add_vertex(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_weighted_edge(from, to, rng.weight());
        }
    }

    graph
}

pub const BRIDGE_LEN: u64 = 10;

/// Barbell: two dense clusters joined by a chain of `BRIDGE_LEN` vertices.
///
/// Every path between the clusters squeezes through the bridge. Requires
/// `node_count > BRIDGE_LEN + 2`.
pub fn gen_barbell(node_count: u64, seed: u64) -> AdjacencyGraph<u64> {
    let cluster_size = (node_count - BRIDGE_LEN) / 2;
    let mut graph = AdjacencyGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 99999);
    let fanout = 20u64.min(cluster_size - 1);

    // Cluster A: 0..cluster_size
    for i in 0..cluster_size {
        graph.add_vertex(i);
    }
    for i in 0..cluster_size {
        for _ in 0..fanout {
            let target = rng.next(cluster_size);
            if target != i {
                graph.add_weighted_edge(i, target, rng.weight());
            }
        }
    }

    // Bridge: chain from the last vertex of A
    let bridge_start = cluster_size;
    for i in 0..BRIDGE_LEN {
        let id = bridge_start + i;
        graph.add_weighted_edge(id - 1, id, rng.weight());
    }

    // Cluster B: after the bridge, entered from the bridge's last vertex
    let b_start = bridge_start + BRIDGE_LEN;
    for i in 0..cluster_size {
        graph.add_vertex(b_start + i);
    }
    graph.add_weighted_edge(b_start - 1, b_start, rng.weight());

    for i in 0..cluster_size {
        for _ in 0..fanout {
            let target = rng.next(cluster_size);
            if target != i {
                graph.add_weighted_edge(b_start + i, b_start + target, rng.weight());
            }
        }
    }

    graph
}

/// DLA (diffusion-limited aggregation): organic branching growth.
///
/// Each new vertex attaches to a random recent "surface" vertex, with an
/// occasional second link that creates loops. Winding, tree-like paths.
pub fn gen_dla(node_count: u64, seed: u64) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(seed ^ 77777);

    graph.add_vertex(0);

    let surface_max = 10000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_weighted_edge(new_node, attach_to, rng.weight());

        // 10% chance of a second connection (loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                graph.add_weighted_edge(new_node, other, rng.weight());
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}

/// Square lattice, side = floor(sqrt(node_count)), right and down edges
/// with random weights. Many equal-hop routes, few equal-weight ones.
pub fn gen_grid(node_count: u64, seed: u64) -> AdjacencyGraph<u64> {
    let side = ((node_count as f64).sqrt() as u64).max(2);
    let mut graph = AdjacencyGraph::with_capacity((side * side) as usize);
    let mut rng = FastRng::new(seed ^ 31337);

    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            graph.add_vertex(id);
            if c + 1 < side {
                graph.add_weighted_edge(id, id + 1, rng.weight());
            }
            if r + 1 < side {
                graph.add_weighted_edge(id, id + side, rng.weight());
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_walk_core::{all_vertices, TraversalDirection};

    #[test]
    fn test_generators_are_deterministic() {
        let a = gen_random(500, 7);
        let b = gen_random(500, 7);
        assert_eq!(a.edge_count(), b.edge_count());
        for v in 0..500 {
            assert_eq!(a.edges_out(&v).len(), b.edges_out(&v).len());
        }
    }

    #[test]
    fn test_lsystem_is_a_tree() {
        let g = gen_lsystem(1000, 1);
        assert_eq!(g.vertex_count(), 1000);
        assert_eq!(g.edge_count(), 999);
        assert_eq!(all_vertices(&g, &0).len(), 1000);
    }

    #[test]
    fn test_barbell_connected_undirected() {
        let g = gen_barbell(200, 3);
        let both = g.view(TraversalDirection::Both);
        assert_eq!(all_vertices(&both, &0).len(), g.vertex_count());
    }

    #[test]
    fn test_grid_shape() {
        let g = gen_grid(100, 0);
        assert_eq!(g.vertex_count(), 100);
        // 2 * side * (side - 1)
        assert_eq!(g.edge_count(), 180);
    }

    #[test]
    fn test_weights_in_range() {
        let mut rng = FastRng::new(5);
        for _ in 0..1000 {
            let w = rng.weight();
            assert!((1.0..=9.0).contains(&w));
        }
    }
}
