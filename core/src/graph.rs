use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Anything a search can store and compare. Vertices are never constructed
/// by the engine, only cloned into paths and scratch maps.
pub trait Vertex: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Vertex for T {}

/// Neighbor lookup: the only capability the searches need from a topology.
///
/// For directed graphs `neighbors` follows outgoing edges only. The returned
/// vertices must be distinct; their order is the order in which every search
/// explores them, so an implementation that fixes the order fixes the
/// tie-breaking of DFS and BFS.
///
/// Lookup must not mutate the graph. Searches call it at most once per
/// expanded vertex.
pub trait Graph {
    type Vertex: Vertex;

    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;

    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex> {
        (**self).neighbors(vertex)
    }
}

/// A graph backed by a plain function value.
pub struct FnGraph<V, F> {
    lookup: F,
    _vertex: PhantomData<fn(&V)>,
}

/// Wrap a neighbor-lookup function as a [`Graph`].
///
/// ```
/// use graph_walk_core::{breadth_first_search, from_fn};
///
/// // Directed ring over 0..5
/// let ring = from_fn(|v: &u32| [(v + 1) % 5]);
/// let path = breadth_first_search(&ring, &0, &3).unwrap();
/// assert_eq!(path.vertices(), &[0, 1, 2, 3]);
/// ```
pub fn from_fn<V, F, I>(lookup: F) -> FnGraph<V, F>
where
    V: Vertex,
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    FnGraph {
        lookup,
        _vertex: PhantomData,
    }
}

impl<V, F, I> Graph for FnGraph<V, F>
where
    V: Vertex,
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    type Vertex = V;

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        (self.lookup)(vertex).into_iter().collect()
    }
}

/// Which edges a [`DirectedView`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Follow edges forward (from → to).
    Outgoing,
    /// Follow edges backward (to → from).
    Incoming,
    /// Follow edges in both directions (undirected traversal).
    Both,
}

/// A weighted edge in an adjacency list.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    pub target: V,
    pub weight: f64,
}

/// In-memory directed graph: adjacency lists in insertion order.
///
/// Edges are stored bidirectionally: `outgoing[a]` contains edges from a,
/// `incoming[b]` contains edges into b. Adding an edge that already exists
/// keeps the first one, so neighbor lists never repeat a vertex.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    outgoing: HashMap<V, Vec<Edge<V>>>,
    incoming: HashMap<V, Vec<Edge<V>>>,
    order: Vec<V>,
}

impl<V: Vertex> AdjacencyGraph<V> {
    pub fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            outgoing: HashMap::with_capacity(vertex_count),
            incoming: HashMap::with_capacity(vertex_count),
            order: Vec::with_capacity(vertex_count),
        }
    }

    /// Register a vertex without edges. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.incoming.insert(vertex.clone(), Vec::new());
        self.outgoing.insert(vertex.clone(), Vec::new());
        self.order.push(vertex);
        true
    }

    /// Add a directed edge with unit weight.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_weighted_edge(from, to, 1.0)
    }

    /// Add a directed edge. Also inserts into the incoming adjacency list.
    /// Returns false (and leaves the graph unchanged) for a parallel edge.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: f64) -> bool {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        let out = self.outgoing.entry(from.clone()).or_default();
        if out.iter().any(|e| e.target == to) {
            return false;
        }
        out.push(Edge {
            target: to.clone(),
            weight,
        });
        self.incoming.entry(to).or_default().push(Edge {
            target: from,
            weight,
        });
        true
    }

    /// Add a pair of opposite edges with the same weight.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: f64) {
        self.add_weighted_edge(a.clone(), b.clone(), weight);
        self.add_weighted_edge(b, a, weight);
    }

    /// Bulk load from an iterator of `(from, to, weight)` triples.
    pub fn load_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        for (from, to, weight) in edges {
            self.add_weighted_edge(from, to, weight);
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }

    /// All vertices in the order they were first added.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Get outgoing edges for a vertex.
    pub fn edges_out(&self, vertex: &V) -> &[Edge<V>] {
        self.outgoing.get(vertex).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Get incoming edges for a vertex.
    pub fn edges_in(&self, vertex: &V) -> &[Edge<V>] {
        self.incoming.get(vertex).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Weight of the directed edge `from → to`, if it exists.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<f64> {
        self.edges_out(from)
            .iter()
            .find(|e| e.target == *to)
            .map(|e| e.weight)
    }

    /// Borrow the graph as a [`Graph`] following the given direction.
    pub fn view(&self, direction: TraversalDirection) -> DirectedView<'_, V> {
        DirectedView {
            graph: self,
            direction,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|v| v.len()).sum()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let vertex_mem = self.order.len() * (3 * size_of::<V>() + 2 * size_of::<Vec<Edge<V>>>());
        let out_edges: usize = self
            .outgoing
            .values()
            .map(|v| v.capacity() * size_of::<Edge<V>>())
            .sum();
        let in_edges: usize = self
            .incoming
            .values()
            .map(|v| v.capacity() * size_of::<Edge<V>>())
            .sum();

        vertex_mem + out_edges + in_edges
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph for AdjacencyGraph<V> {
    type Vertex = V;

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.edges_out(vertex).iter().map(|e| e.target.clone()).collect()
    }
}

/// Borrowed reading of an [`AdjacencyGraph`] along a [`TraversalDirection`].
#[derive(Debug, Clone, Copy)]
pub struct DirectedView<'a, V> {
    graph: &'a AdjacencyGraph<V>,
    direction: TraversalDirection,
}

impl<V: Vertex> DirectedView<'_, V> {
    /// Weight of the edge traversed when stepping `from → to` in this view.
    ///
    /// With `Both`, an existing forward edge wins over a reverse one.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<f64> {
        match self.direction {
            TraversalDirection::Outgoing => self.graph.edge_weight(from, to),
            TraversalDirection::Incoming => self.graph.edge_weight(to, from),
            TraversalDirection::Both => self
                .graph
                .edge_weight(from, to)
                .or_else(|| self.graph.edge_weight(to, from)),
        }
    }
}

impl<V: Vertex> Graph for DirectedView<'_, V> {
    type Vertex = V;

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        let (use_out, use_inc) = match self.direction {
            TraversalDirection::Outgoing => (true, false),
            TraversalDirection::Incoming => (false, true),
            TraversalDirection::Both => (true, true),
        };

        let out_iter = self
            .graph
            .edges_out(vertex)
            .iter()
            .filter(move |_| use_out);
        let in_iter = self
            .graph
            .edges_in(vertex)
            .iter()
            .filter(move |_| use_inc);

        let mut result: Vec<V> = Vec::new();
        for edge in out_iter.chain(in_iter) {
            // A vertex linked both ways appears once
            if !result.contains(&edge.target) {
                result.push(edge.target.clone());
            }
        }
        result
    }
}
