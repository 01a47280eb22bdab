use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::{Display, Write};

use crate::error::Result;
use crate::graph::Graph;
use crate::path::{trace_back, Path};
use crate::search::{settle, Budget, Searcher};

/// All vertices reachable from `root` by following zero or more edges,
/// `root` included.
///
/// Order is irrelevant; each vertex's neighbors are looked up exactly once.
pub fn all_vertices<G: Graph>(graph: &G, root: &G::Vertex) -> HashSet<G::Vertex> {
    // Unbounded budget cannot fail
    reachable(graph, root, Budget::new(None)).unwrap_or_default()
}

pub(crate) fn reachable<G: Graph>(
    graph: &G,
    root: &G::Vertex,
    budget: Budget,
) -> Result<HashSet<G::Vertex>> {
    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut stack: Vec<G::Vertex> = vec![root.clone()];

    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());
        budget.check(visited.len())?;

        for neighbor in graph.neighbors(&current) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(visited)
}

/// Render the adjacency list of everything reachable from `root`:
///
/// ```text
/// Graph adjacency list:
/// A: [B,C]
/// B: [C]
/// C: []
/// ```
///
/// Vertices appear in pre-order of a spanning tree rooted at `root`.
/// Neighbors are sorted by their `Display` text both when listed and when
/// descended into, so output does not depend on neighbor iteration order.
pub fn format_adjacency_list<G>(graph: &G, root: &G::Vertex) -> String
where
    G: Graph,
    G::Vertex: Display,
{
    let mut out = String::from("Graph adjacency list:\n");
    let mut rendered: HashSet<G::Vertex> = HashSet::new();
    let mut stack: Vec<G::Vertex> = vec![root.clone()];

    while let Some(current) = stack.pop() {
        if !rendered.insert(current.clone()) {
            continue;
        }

        let mut neighbors: Vec<(String, G::Vertex)> = graph
            .neighbors(&current)
            .into_iter()
            .map(|n| (n.to_string(), n))
            .collect();
        neighbors.sort_by(|a, b| a.0.cmp(&b.0));

        let listed: Vec<&str> = neighbors.iter().map(|(text, _)| text.as_str()).collect();
        // Writing to a String never fails
        let _ = writeln!(out, "{}: [{}]", current, listed.join(","));

        // Reverse so the smallest neighbor is popped (rendered) first
        for (_, neighbor) in neighbors.into_iter().rev() {
            if !rendered.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    out
}

/// Depth-first search for a path from `start` to `target`.
///
/// Returns `None` if `target` is unreachable. The path's `visited` set
/// includes dead ends explored before the target was found.
pub fn depth_first_search<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
) -> Option<Path<G::Vertex>> {
    settle(Searcher::new(graph).depth_first(start, target))
}

/// Breadth-first search for a path from `start` to `target` with the fewest
/// edges. Returns `None` if `target` is unreachable.
pub fn breadth_first_search<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
) -> Option<Path<G::Vertex>> {
    settle(Searcher::new(graph).breadth_first(start, target))
}

/// A vertex on the DFS stack with a cursor into its neighbor list.
struct Frame<V> {
    neighbors: Vec<V>,
    next: usize,
}

/// Iterative form of the recursive backtracking search: a vertex is
/// appended to the path when entered and removed when all its neighbors
/// are exhausted without reaching the target.
pub(crate) fn depth_first<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
    budget: Budget,
) -> Result<Option<Path<G::Vertex>>> {
    if start == target {
        return Ok(Some(Path::single(start.clone())));
    }

    let mut path = Path::new();
    let mut stack: Vec<Frame<G::Vertex>> = Vec::new();

    path.mark_visited(start.clone());
    budget.check(path.visited().len())?;
    path.push_vertex(start.clone());
    stack.push(Frame {
        neighbors: graph.neighbors(start),
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.neighbors.get(frame.next).cloned() else {
            // Dead end: backtrack
            stack.pop();
            path.pop_vertex();
            continue;
        };
        frame.next += 1;

        if !path.mark_visited(neighbor.clone()) {
            continue;
        }
        budget.check(path.visited().len())?;
        path.push_vertex(neighbor.clone());

        if neighbor == *target {
            return Ok(Some(path));
        }

        stack.push(Frame {
            neighbors: graph.neighbors(&neighbor),
            next: 0,
        });
    }

    Ok(None)
}

/// FIFO frontier search. Vertices are marked visited when enqueued; the
/// target is recognized when dequeued and its path rebuilt from the
/// recorded enqueuing parents.
pub(crate) fn breadth_first<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
    budget: Budget,
) -> Result<Option<Path<G::Vertex>>> {
    if start == target {
        return Ok(Some(Path::single(start.clone())));
    }

    // vertex → the vertex whose expansion enqueued it (None for start)
    let mut parents: HashMap<G::Vertex, Option<G::Vertex>> = HashMap::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();

    parents.insert(start.clone(), None);
    budget.check(parents.len())?;
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if current == *target {
            let vertices = trace_back(&current, |v| parents.get(v).cloned().flatten());
            let visited = parents.into_keys().collect();
            return Ok(Some(Path::from_parts(vertices, visited)));
        }

        for neighbor in graph.neighbors(&current) {
            if !parents.contains_key(&neighbor) {
                parents.insert(neighbor.clone(), Some(current.clone()));
                budget.check(parents.len())?;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(None)
}
