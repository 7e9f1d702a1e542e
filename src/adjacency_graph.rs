use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
    sync::Arc,
};

use derivative::Derivative;
use parking_lot::RwLock;

use crate::{
    edge::Edge,
    edge_list::{EdgeIter, EdgeList},
    error::{GraphError, GraphResult},
    graph::Graph,
    tracing_support::{debug, trace},
};

/// A directed graph stored as a map from each vertex to the list of its
/// outgoing edges.
///
/// The vertex map is guarded by a read-write lock.  Registering a new vertex
/// takes the write lock; every other operation takes the read lock, and
/// only for as long as it takes to look up the vertices involved.  Adding
/// an edge checks both endpoints and appends the edge while holding the
/// read lock, so an edge is never appended unless both of its endpoints
/// were present.  Traversals hold no graph lock at all while they walk an
/// edge list.
#[derive(Derivative)]
#[derivative(Default(bound = ""))]
pub struct AdjacencyGraph<V> {
    vertices: RwLock<HashMap<V, Arc<EdgeList<V>>>>,
}

impl<V> AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for at least `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    fn missing_endpoint(
        vertices: &HashMap<V, Arc<EdgeList<V>>>,
        from: &V,
        to: &V,
    ) -> Option<GraphError<V>> {
        [from, to]
            .into_iter()
            .find(|v| !vertices.contains_key(*v))
            .map(|v| {
                debug!(vertex = ?v, "rejected edge with unknown endpoint");
                GraphError::VertexNotFound(v.clone())
            })
    }
}

impl<V> Graph for AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    type Vertex = V;

    fn add_vertex(&self, vertex: V) -> bool {
        if self.vertices.read().contains_key(&vertex) {
            return false;
        }
        match self.vertices.write().entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                trace!(vertex = ?entry.key(), "added vertex");
                entry.insert(Arc::new(EdgeList::new()));
                true
            }
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.read().contains_key(vertex)
    }

    fn num_vertices(&self) -> usize {
        self.vertices.read().len()
    }

    fn vertices(&self) -> Vec<V> {
        self.vertices.read().keys().cloned().collect()
    }

    fn insert_edge(&self, edge: Edge<V>) -> GraphResult<(), V> {
        let vertices = self.vertices.read();
        if let Some(err) = Self::missing_endpoint(&vertices, edge.from(), edge.to()) {
            return Err(err);
        }
        if let Some(list) = vertices.get(edge.from()) {
            list.push(edge);
        }
        Ok(())
    }

    fn add_bidirectional_edge(&self, from: V, to: V) -> GraphResult<(), V> {
        let vertices = self.vertices.read();
        if let Some(err) = Self::missing_endpoint(&vertices, &from, &to) {
            return Err(err);
        }
        let forward = Edge::new(from, to);
        let backward = forward.reversed();
        if let Some(list) = vertices.get(forward.from()) {
            list.push(forward);
        }
        if let Some(list) = vertices.get(backward.from()) {
            list.push(backward);
        }
        Ok(())
    }

    fn num_edges(&self) -> usize {
        self.vertices.read().values().map(|list| list.len()).sum()
    }

    fn edges_from(&self, vertex: &V) -> Option<EdgeIter<V>> {
        let list = self.vertices.read().get(vertex).cloned()?;
        Some(EdgeIter::new(list))
    }
}

impl<V> Debug for AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vertices = self.vertices.read();
        f.debug_map()
            .entries(vertices.iter().map(|(vertex, list)| {
                let targets: Vec<_> = EdgeIter::new(list.clone())
                    .map(|edge| edge.into_ends().1)
                    .collect();
                (vertex, targets)
            }))
            .finish()
    }
}
