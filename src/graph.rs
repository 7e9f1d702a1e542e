//! `Graph` is the core trait for working with graphs in this library.
//!
//! All methods take `&self`.  Implementations synchronize internally, so a
//! graph can be shared between threads behind an `Arc` and mutated and
//! queried concurrently.  There are no removal operations; a graph only
//! ever grows.
//!
//! Implementors provide vertex registration, edge insertion and read access
//! to each vertex's outgoing edges.  Path queries, edge construction and
//! traversal are provided on top of those.

use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::{
    edge::Edge,
    edge_list::EdgeIter,
    error::GraphResult,
    path::Path,
    search::{BfsIterator, PathMethod, bfs_path},
};

/// A directed graph whose vertices are values of type [`Self::Vertex`].
///
/// Vertices are identified by value: the `Eq` and `Hash` implementations of
/// the vertex type must agree with each other, as for any `HashMap` key.
/// Edges may be parallel (the same edge added twice is stored twice) and
/// may be self-loops.
pub trait Graph {
    type Vertex: Eq + Hash + Clone + Debug;

    // Vertices

    /// Registers a vertex.  Returns true if the vertex was not already in
    /// the graph; adding an existing vertex has no effect.
    fn add_vertex(&self, vertex: Self::Vertex) -> bool;

    /// Returns true if the vertex has been added to the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Gets a snapshot of all vertices in the graph, in unspecified order.
    fn vertices(&self) -> Vec<Self::Vertex>;

    // Edges

    /// Adds an existing edge value to the graph.  Fails with
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// either endpoint has not been added, in which case the graph is
    /// unchanged.
    fn insert_edge(&self, edge: Edge<Self::Vertex>) -> GraphResult<(), Self::Vertex>;

    /// Adds an edge from `from` to `to` and returns it.  Fails under the same
    /// conditions as [`Self::insert_edge`].
    fn add_edge(
        &self,
        from: Self::Vertex,
        to: Self::Vertex,
    ) -> GraphResult<Edge<Self::Vertex>, Self::Vertex> {
        let edge = Edge::new(from, to);
        self.insert_edge(edge.clone())?;
        Ok(edge)
    }

    /// Adds an edge in each direction between two vertices.  Both endpoints
    /// are checked before either edge is added, so on failure the graph is
    /// unchanged.
    fn add_bidirectional_edge(
        &self,
        from: Self::Vertex,
        to: Self::Vertex,
    ) -> GraphResult<(), Self::Vertex>;

    /// Gets the total number of edges in the graph, counting parallel edges
    /// separately.
    fn num_edges(&self) -> usize;

    /// Gets an iterator over the outgoing edges of a vertex in the order they
    /// were added, or `None` if the vertex is not in the graph.  Edges added
    /// after the iterator is created are not included.
    fn edges_from(&self, vertex: &Self::Vertex) -> Option<EdgeIter<Self::Vertex>>;

    /// Gets the distinct targets of a vertex's outgoing edges, in the order
    /// they were first added.
    fn successors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex> {
        let mut seen = HashSet::new();
        self.edges_from(vertex)
            .into_iter()
            .flatten()
            .filter_map(|edge| {
                let (_, to) = edge.into_ends();
                seen.insert(to.clone()).then_some(to)
            })
            .collect()
    }

    // Paths

    /// Finds a path from `start` to `end` using the given method.
    ///
    /// Returns `Ok(None)` if either vertex is not in the graph or there is no
    /// path between them, and an empty path if `start == end`.  A missing
    /// vertex is not an error here, unlike when adding edges.
    fn get_path(
        &self,
        start: &Self::Vertex,
        end: &Self::Vertex,
        method: PathMethod,
    ) -> GraphResult<Option<Path<Self::Vertex>>, Self::Vertex> {
        match method {
            PathMethod::Bfs => bfs_path(self, start, end),
        }
    }

    /// Gets an iterator over the vertices reachable from `start` in
    /// breadth-first order.
    fn bfs_order(&self, start: Self::Vertex) -> BfsIterator<'_, Self>
    where
        Self: Sized,
    {
        BfsIterator::new(self, start)
    }
}
