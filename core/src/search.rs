use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dijkstra;
use crate::error::{Result, SearchError};
use crate::graph::{Graph, Vertex};
use crate::path::Path;
use crate::traversal;

/// Limits and checks applied to every search run through a [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Abort with [`SearchError::BudgetExhausted`] once more than this many
    /// vertices have been visited. `None` = unbounded.
    pub max_visited: Option<usize>,
    /// Reject negative and NaN edge weights in Dijkstra instead of returning
    /// an unspecified result.
    pub validate_weights: bool,
}

impl SearchConfig {
    pub fn with_max_visited(mut self, limit: usize) -> Self {
        self.max_visited = Some(limit);
        self
    }

    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_visited: None,
            validate_weights: true,
        }
    }
}

/// Visited-count guard shared by all algorithms.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    limit: Option<usize>,
}

impl Budget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    /// Call after inserting into the visited set.
    pub(crate) fn check(&self, visited: usize) -> Result<()> {
        match self.limit {
            Some(limit) if visited > limit => Err(SearchError::BudgetExhausted { limit }),
            _ => Ok(()),
        }
    }
}

/// Runs searches over one graph with a fixed [`SearchConfig`].
///
/// Each call allocates its own scratch state; nothing survives between calls,
/// so one `Searcher` (or many over the same `&G`) can be reused freely.
///
/// ```
/// use graph_walk_core::{AdjacencyGraph, SearchConfig, SearchError, Searcher};
///
/// let mut g = AdjacencyGraph::new();
/// for i in 0u32..100 {
///     g.add_edge(i, i + 1);
/// }
/// let searcher = Searcher::new(&g).with_config(SearchConfig::default().with_max_visited(10));
/// assert_eq!(
///     searcher.breadth_first(&0, &100),
///     Err(SearchError::BudgetExhausted { limit: 10 })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Searcher<G> {
    graph: G,
    config: SearchConfig,
}

impl<G: Graph> Searcher<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn budget(&self) -> Budget {
        Budget::new(self.config.max_visited)
    }

    /// Every vertex reachable from `root`, `root` included.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn reachable(&self, root: &G::Vertex) -> Result<HashSet<G::Vertex>> {
        let result = traversal::reachable(&self.graph, root, self.budget());
        if let Ok(ref vertices) = result {
            debug!(reached = vertices.len(), "reachability complete");
        }
        result
    }

    /// Depth-first search with backtracking. `Ok(None)` if `target` is unreachable.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn depth_first(
        &self,
        start: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Option<Path<G::Vertex>>> {
        let result = traversal::depth_first(&self.graph, start, target, self.budget());
        log_outcome("depth-first", &result);
        result
    }

    /// Breadth-first search: the returned path has the fewest edges.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn breadth_first(
        &self,
        start: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Option<Path<G::Vertex>>> {
        let result = traversal::breadth_first(&self.graph, start, target, self.budget());
        log_outcome("breadth-first", &result);
        result
    }

    /// Dijkstra's shortest path by total weight.
    ///
    /// `weight(u, v)` is only ever called for `v` in `neighbors(u)`; its value
    /// for non-edges is never needed.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn dijkstra<F>(
        &self,
        start: &G::Vertex,
        target: &G::Vertex,
        weight: F,
    ) -> Result<Option<Path<G::Vertex>>>
    where
        F: FnMut(&G::Vertex, &G::Vertex) -> f64,
    {
        let result = dijkstra::shortest_path(
            &self.graph,
            start,
            target,
            weight,
            self.budget(),
            self.config.validate_weights,
        );
        log_outcome("dijkstra", &result);
        result
    }
}

fn log_outcome<V: Vertex>(algorithm: &str, result: &Result<Option<Path<V>>>) {
    match result {
        Ok(Some(path)) => debug!(
            algorithm,
            length = path.len(),
            weight = path.total_weight(),
            visited = path.visited().len(),
            "path found"
        ),
        Ok(None) => debug!(algorithm, "target unreachable"),
        Err(err) => warn!(algorithm, %err, "search aborted"),
    }
}

/// Collapse a search result to the plain "path or nothing" contract.
pub(crate) fn settle<V>(result: Result<Option<Path<V>>>) -> Option<Path<V>> {
    result.ok().flatten()
}
