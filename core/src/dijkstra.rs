use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::error::{Result, SearchError};
use crate::graph::Graph;
use crate::path::{trace_back, Path};
use crate::search::{settle, Budget, Searcher};

/// Accumulator drift above this is reported when the path weight is recomputed.
const WEIGHT_DRIFT_TOLERANCE: f64 = 1e-9;

/// Edge-weighted shortest path from `start` to `target` (Dijkstra).
///
/// `weight(u, v)` gives the cost of the edge `u → v` and must be
/// non-negative. It is only called for `v` in `neighbors(u)`; what it returns
/// for a non-edge is never observed, and the engine does not check that the
/// pair is an edge.
///
/// Returns `None` if `target` is unreachable, or if `weight` produced a
/// negative or NaN value (use [`Searcher::dijkstra`] to get that as an error).
///
/// ```
/// use graph_walk_core::{dijkstra_shortest_path, AdjacencyGraph};
///
/// let mut g = AdjacencyGraph::new();
/// g.add_weighted_edge('A', 'B', 5.0);
/// g.add_weighted_edge('A', 'C', 1.0);
/// g.add_weighted_edge('B', 'D', 1.0);
/// g.add_weighted_edge('C', 'D', 1.0);
///
/// let path = dijkstra_shortest_path(&g, &'A', &'D', |u, v| {
///     g.edge_weight(u, v).unwrap_or(f64::NAN)
/// })
/// .unwrap();
/// assert_eq!(path.vertices(), &['A', 'C', 'D']);
/// assert_eq!(path.total_weight(), 2.0);
/// ```
pub fn dijkstra_shortest_path<G, F>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
    weight: F,
) -> Option<Path<G::Vertex>>
where
    G: Graph,
    F: FnMut(&G::Vertex, &G::Vertex) -> f64,
{
    settle(Searcher::new(graph).dijkstra(start, target, weight))
}

/// Per-vertex bookkeeping for one run: the spanning tree built so far.
#[derive(Debug)]
struct SpanningNode<V> {
    parent: Option<V>,
    weight_to: f64,
    finalized: bool,
}

/// Priority queue entry. Superseded entries stay in the heap and are
/// dropped when popped for an already-finalized vertex.
#[derive(Debug)]
struct HeapEntry<V> {
    weight_to: f64,
    /// Insertion sequence; breaks weight ties in FIFO order.
    seq: u64,
    vertex: V,
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight_to
            .total_cmp(&other.weight_to)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

pub(crate) fn shortest_path<G, F>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
    mut weight: F,
    budget: Budget,
    validate_weights: bool,
) -> Result<Option<Path<G::Vertex>>>
where
    G: Graph,
    F: FnMut(&G::Vertex, &G::Vertex) -> f64,
{
    if start == target {
        return Ok(Some(Path::single(start.clone())));
    }

    let mut tree: HashMap<G::Vertex, SpanningNode<G::Vertex>> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<G::Vertex>>> = BinaryHeap::new();
    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut seq: u64 = 0;

    tree.insert(
        start.clone(),
        SpanningNode {
            parent: None,
            weight_to: 0.0,
            finalized: false,
        },
    );
    heap.push(Reverse(HeapEntry {
        weight_to: 0.0,
        seq,
        vertex: start.clone(),
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let current = entry.vertex;
        let current_weight = match tree.get_mut(&current) {
            Some(node) if !node.finalized => {
                node.finalized = true;
                node.weight_to
            }
            // Stale duplicate of a vertex finalized earlier
            _ => continue,
        };

        visited.insert(current.clone());
        budget.check(visited.len())?;

        if current == *target {
            let vertices = trace_back(&current, |v| tree.get(v).and_then(|n| n.parent.clone()));
            let mut path = Path::from_parts(vertices, visited);
            path.recalculate_total_weight(&mut weight);
            if (path.total_weight() - current_weight).abs() > WEIGHT_DRIFT_TOLERANCE {
                debug!(
                    accumulated = current_weight,
                    recomputed = path.total_weight(),
                    "path weight differs from spanning-tree accumulator"
                );
            }
            return Ok(Some(path));
        }

        for neighbor in graph.neighbors(&current) {
            if tree.get(&neighbor).is_some_and(|n| n.finalized) {
                continue;
            }

            let edge_weight = weight(&current, &neighbor);
            if validate_weights && !is_valid_weight(edge_weight) {
                return Err(SearchError::InvalidWeight {
                    weight: edge_weight,
                });
            }
            let candidate = current_weight + edge_weight;

            let improves = tree
                .get(&neighbor)
                .map_or(true, |n| candidate < n.weight_to);
            if improves {
                tree.insert(
                    neighbor.clone(),
                    SpanningNode {
                        parent: Some(current.clone()),
                        weight_to: candidate,
                        finalized: false,
                    },
                );
                seq += 1;
                heap.push(Reverse(HeapEntry {
                    weight_to: candidate,
                    seq,
                    vertex: neighbor,
                }));
            }
        }
    }

    Ok(None)
}

fn is_valid_weight(weight: f64) -> bool {
    // Also rejects NaN
    weight >= 0.0
}
