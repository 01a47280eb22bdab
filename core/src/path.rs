use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, Vertex};

/// How many vertices `Display` shows at each end of a long path.
const DISPLAY_CUT: usize = 10;

/// One route found by a search.
///
/// Invariant: every consecutive pair `(vertices[i-1], vertices[i])` is an edge,
/// i.e. `vertices[i]` is among the neighbors of `vertices[i-1]`. A path with a
/// single vertex starts and ends at that vertex. An empty path has neither.
///
/// `visited` holds every vertex the search examined, on the path or not. It is
/// diagnostic only and ignored by `==`.
#[derive(Debug, Clone, Serialize)]
pub struct Path<V> {
    vertices: Vec<V>,
    total_weight: f64,
    visited: HashSet<V>,
}

impl<V: Vertex> Path<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            total_weight: 0.0,
            visited: HashSet::new(),
        }
    }

    /// A path consisting of `vertex` alone, marked visited.
    pub fn single(vertex: V) -> Self {
        let mut path = Self::new();
        path.mark_visited(vertex.clone());
        path.push_vertex(vertex);
        path
    }

    pub(crate) fn from_parts(vertices: Vec<V>, visited: HashSet<V>) -> Self {
        Self {
            vertices,
            total_weight: 0.0,
            visited,
        }
    }

    /// Vertices from start to target.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn visited(&self) -> &HashSet<V> {
        &self.visited
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges (hops) on the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    pub fn push_vertex(&mut self, vertex: V) {
        self.vertices.push(vertex);
    }

    /// Remove the last vertex (backtracking). No-op on an empty path.
    pub fn pop_vertex(&mut self) -> Option<V> {
        self.vertices.pop()
    }

    /// Record `vertex` as examined. Returns `false` if it already was.
    pub fn mark_visited(&mut self, vertex: V) -> bool {
        self.visited.insert(vertex)
    }

    /// Recompute `total_weight` as the sum of `weight(prev, next)` over
    /// consecutive pairs. Empty and single-vertex paths weigh 0.
    pub fn recalculate_total_weight<F>(&mut self, mut weight: F)
    where
        F: FnMut(&V, &V) -> f64,
    {
        self.total_weight = self
            .vertices
            .windows(2)
            .map(|pair| weight(&pair[0], &pair[1]))
            .sum();
    }

    /// Check the adjacency invariant against `graph`.
    pub fn is_valid_in<G>(&self, graph: &G) -> bool
    where
        G: Graph<Vertex = V>,
    {
        self.vertices
            .windows(2)
            .all(|pair| graph.neighbors(&pair[0]).contains(&pair[1]))
    }
}

/// Walk predecessor links back from `target` until a vertex without a
/// predecessor (the start), returning the vertices in start → target order.
pub(crate) fn trace_back<V, F>(target: &V, mut parent_of: F) -> Vec<V>
where
    V: Vertex,
    F: FnMut(&V) -> Option<V>,
{
    let mut vertices = vec![target.clone()];
    while let Some(parent) = vertices.last().and_then(&mut parent_of) {
        vertices.push(parent);
    }
    vertices.reverse();
    vertices
}

impl<V: Vertex> Default for Path<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Path<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.total_weight == other.total_weight
    }
}

/// `Weight=2.00 Length=3 visited=4 (A, B, C)`. Paths longer than twice
/// `DISPLAY_CUT` show only their head and tail around a single `...`.
impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight={:.2} Length={} visited={} (",
            self.total_weight,
            self.vertices.len(),
            self.visited.len()
        )?;

        let len = self.vertices.len();
        let mut separator = "";
        for (i, vertex) in self.vertices.iter().enumerate() {
            let in_head = i < DISPLAY_CUT;
            let in_tail = i + DISPLAY_CUT + 1 > len;
            if in_head || in_tail {
                write!(f, "{}{}", separator, vertex)?;
                separator = ", ";
            } else if i == DISPLAY_CUT {
                write!(f, "{}...", separator)?;
            }
        }
        write!(f, ")")
    }
}
