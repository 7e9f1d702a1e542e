use std::{collections::HashSet, fmt::Debug, hash::Hash};

use quickcheck::{Arbitrary, Gen};

use crate::{AdjacencyGraph, Edge, Graph, Path};

/// A randomly generated graph for property tests, along with the edges it
/// was built from.
#[derive(Clone)]
pub struct ArbGraph<V> {
    pub graph: std::sync::Arc<AdjacencyGraph<V>>,
    pub vertices: Vec<V>,
    pub edges: Vec<Edge<V>>,
}

impl<V> Debug for ArbGraph<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArbGraph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<V> Arbitrary for ArbGraph<V>
where
    V: Arbitrary + Eq + Hash + Debug,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;

        let graph = AdjacencyGraph::new();
        let mut vertices = Vec::new();
        for _ in 0..num_vertices {
            let vertex = V::arbitrary(g);
            if graph.add_vertex(vertex.clone()) {
                vertices.push(vertex);
            }
        }

        let mut edges = Vec::new();
        for i in 0..num_edges {
            if vertices.is_empty() {
                break;
            }
            let from = vertices[usize::arbitrary(g) % vertices.len()].clone();
            let to = vertices[usize::arbitrary(g) % vertices.len()].clone();
            let repeat = if i < num_extra_parallel_edges { 2 } else { 1 };
            for _ in 0..repeat {
                if let Ok(edge) = graph.add_edge(from.clone(), to.clone()) {
                    edges.push(edge);
                }
            }
        }

        ArbGraph {
            graph: std::sync::Arc::new(graph),
            vertices,
            edges,
        }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Panics unless `path` is a contiguous walk through edges of `graph` from
/// `start` to `end`.
pub fn check_path<G: Graph>(graph: &G, path: &Path<G::Vertex>, start: &G::Vertex, end: &G::Vertex) {
    assert_eq!(path.start(), start);
    assert_eq!(path.end(), end);
    if let (Some(first), Some(last)) = (path.edges().first(), path.edges().last()) {
        assert_eq!(first.from(), start);
        assert_eq!(last.to(), end);
    }
    for pair in path.edges().windows(2) {
        assert_eq!(pair[0].to(), pair[1].from());
    }
    for edge in path.edges() {
        let present = graph
            .edges_from(edge.from())
            .is_some_and(|mut edges| edges.any(|e| e == *edge));
        assert!(present, "path uses an edge not in the graph: {edge:?}");
    }
}
