//! graph-walk-core: generic graph traversal engine.
//!
//! Searches run over anything that can answer "which vertices are directly
//! reachable from this one?" (the [`Graph`] trait, or a plain function via
//! [`from_fn`]). Provided operations:
//!
//! - reachability ([`all_vertices`]) and adjacency-list rendering
//!   ([`format_adjacency_list`])
//! - unweighted path search: [`depth_first_search`], [`breadth_first_search`]
//! - weighted shortest path: [`dijkstra_shortest_path`]
//!
//! "No path" is `None`, never an error. [`Searcher`] runs the same searches
//! under a [`SearchConfig`] (visited-count budget, weight validation) and
//! reports aborted searches as [`SearchError`].
//!
//! Searches never mutate the graph and keep no state between calls.

mod dijkstra;
mod error;
mod graph;
mod path;
mod search;
mod traversal;

pub use dijkstra::dijkstra_shortest_path;
pub use error::{Result, SearchError};
pub use graph::{
    from_fn, AdjacencyGraph, DirectedView, Edge, FnGraph, Graph, TraversalDirection, Vertex,
};
pub use path::Path;
pub use search::{SearchConfig, Searcher};
pub use traversal::{
    all_vertices, breadth_first_search, depth_first_search, format_adjacency_list,
};
