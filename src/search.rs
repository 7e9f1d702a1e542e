//! Breadth-first search over a [`Graph`].
//!
//! [`bfs_path`] finds a shortest path by edge count.  While searching it
//! records, for every vertex it discovers, the single edge by which that
//! vertex was first reached.  Those records form a tree rooted at the start
//! vertex (the back graph), and walking the tree from the end vertex back
//! to the root yields the path in reverse.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt::{self, Debug},
    hash::Hash,
    str::FromStr,
};

use derivative::Derivative;
use thiserror::Error;

use crate::{
    edge::Edge,
    error::{GraphError, GraphResult},
    graph::Graph,
    path::Path,
    tracing_support::{debug, info_span, trace},
};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// The traversal used to answer a path query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathMethod {
    /// Breadth-first search.  Finds a path with the fewest edges.
    #[default]
    Bfs,
}

impl fmt::Display for PathMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMethod::Bfs => write!(f, "bfs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown path method {0:?}")]
pub struct ParsePathMethodError(pub String);

impl FromStr for PathMethod {
    type Err = ParsePathMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bfs") {
            Ok(PathMethod::Bfs)
        } else {
            Err(ParsePathMethodError(s.to_string()))
        }
    }
}

/// For each vertex discovered by one search, the edge pointing back toward
/// the vertex it was discovered from.  The start vertex has no entry.
#[derive(Derivative)]
#[derivative(Debug(bound = "V: Debug"))]
pub(crate) struct BackGraph<V> {
    start: V,
    back_edges: HashMap<V, Edge<V>>,
}

impl<V> BackGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new(start: V) -> Self {
        Self {
            start,
            back_edges: HashMap::with_capacity(DEFAULT_HASH_SET_CAPACITY),
        }
    }

    /// Records that `vertex` was reached from `predecessor`, replacing any
    /// earlier record for `vertex`.
    pub fn record(&mut self, vertex: V, predecessor: V) {
        trace!(?vertex, ?predecessor, "discovered");
        self.back_edges
            .insert(vertex.clone(), Edge::new(vertex, predecessor));
    }

    /// Number of vertices in the tree, including the start vertex.
    pub fn num_vertices(&self) -> usize {
        self.back_edges.len() + 1
    }

    /// Walks back from `end` to the start vertex and returns the path in
    /// forward order.
    pub fn into_path(mut self, end: V) -> GraphResult<Path<V>, V> {
        let max_hops = self.num_vertices();
        let mut edges = Vec::new();
        let mut current = end;
        let mut hops = 0;
        while current != self.start {
            if hops > max_hops {
                return Err(GraphError::BadBackGraph(format!(
                    "back graph contains a loop; gave up after {hops} hops"
                )));
            }
            let back_edge = self.back_edges.remove(&current).ok_or_else(|| {
                GraphError::BadBackGraph(format!("no back edge recorded for {current:?}"))
            })?;
            let (vertex, predecessor) = back_edge.into_ends();
            edges.push(Edge::new(predecessor.clone(), vertex));
            current = predecessor;
            hops += 1;
        }
        edges.reverse();
        debug!(len = edges.len(), "reconstructed path");
        Ok(Path::from_edges(self.start, edges))
    }
}

/// Finds a shortest path from `start` to `end` by breadth-first search.
///
/// Returns `Ok(None)` if either vertex is not in the graph or `end` is not
/// reachable from `start`, and an empty path if `start == end`.  Edges out
/// of each vertex are examined in insertion order, which decides between
/// paths of equal length.
///
/// The graph may be modified by other threads during the search.  Each
/// vertex's edges are read once, when the vertex is expanded, so the result
/// reflects some state the graph passed through while the search ran.
pub fn bfs_path<G>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> GraphResult<Option<Path<G::Vertex>>, G::Vertex>
where
    G: Graph + ?Sized,
{
    let _span = info_span!("get_path", ?start, ?end).entered();

    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        debug!("endpoint not in graph");
        return Ok(None);
    }
    if start == end {
        return Ok(Some(Path::new(start.clone())));
    }

    let mut back_graph = BackGraph::new(start.clone());
    let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(vertex) = queue.pop_front() {
        let Some(edges) = graph.edges_from(&vertex) else {
            continue;
        };
        for edge in edges {
            let to = edge.to();
            if to == end {
                back_graph.record(end.clone(), vertex);
                return back_graph.into_path(end.clone()).map(Some);
            }
            if visited.insert(to.clone()) {
                back_graph.record(to.clone(), vertex.clone());
                queue.push_back(to.clone());
            }
        }
    }

    debug!(visited = visited.len(), "no path");
    Ok(None)
}

/// Iterates over the vertices reachable from a start vertex in breadth-first
/// order, beginning with the start vertex itself.
pub struct BfsIterator<'g, G: Graph + ?Sized> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    queue: VecDeque<G::Vertex>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph + ?Sized,
{
    /// Creates an iterator starting at `start`.  The iterator is empty if
    /// `start` is not in the graph.
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        let mut queue = VecDeque::new();
        if graph.contains_vertex(&start) {
            visited.insert(start.clone());
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph + ?Sized,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for edge in self.graph.edges_from(&vertex).into_iter().flatten() {
            let neighbor = edge.to();
            if self.visited.insert(neighbor.clone()) {
                self.queue.push_back(neighbor.clone());
            }
        }
        Some(vertex)
    }
}
