use std::{fmt::Debug, iter::once};

use derivative::Derivative;

use crate::edge::Edge;

/// A path through a graph, represented as a start vertex and the sequence
/// of edges leading away from it.  A path with no edges is a valid,
/// zero-length path that starts and ends at the same vertex.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    PartialEq(bound = "V: PartialEq"),
    Eq(bound = "V: Eq"),
    Hash(bound = "V: std::hash::Hash")
)]
pub struct Path<V> {
    start: V,
    edges: Vec<Edge<V>>,
}

impl<V> Path<V>
where
    V: Eq + Clone + Debug,
{
    /// Creates a new empty path starting at the given vertex.
    pub fn new(start: V) -> Self {
        Self {
            start,
            edges: Vec::new(),
        }
    }

    pub fn from_edges(start: V, edges: impl IntoIterator<Item = Edge<V>>) -> Self {
        let mut path = Self::new(start);
        path.extend(edges);
        path
    }

    /// Returns the first vertex in the path.
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Returns the last vertex in the path.
    pub fn end(&self) -> &V {
        self.edges.last().map_or(&self.start, |edge| edge.to())
    }

    /// Returns the number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }

    /// Returns an iterator over the vertices visited by the path, including
    /// the start vertex.  A path of `n` edges visits `n + 1` vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        once(&self.start).chain(self.edges.iter().map(|edge| edge.to()))
    }

    /// Adds an edge to the end of the path.  Panics if the edge does not
    /// leave the current last vertex of the path.
    pub fn add_edge(&mut self, edge: Edge<V>) {
        assert_eq!(
            edge.from(),
            self.end(),
            "Edge source does not match end of path"
        );
        self.edges.push(edge);
    }

    /// Extends the path by appending all edges from another path.  Panics if
    /// the other path does not start where this one ends.
    pub fn extend_with(&mut self, other: &Path<V>) {
        assert_eq!(other.start(), self.end(), "Paths are not contiguous");
        for edge in other.edges() {
            self.add_edge(edge.clone());
        }
    }
}

impl<V> Extend<Edge<V>> for Path<V>
where
    V: Eq + Clone + Debug,
{
    fn extend<T: IntoIterator<Item = Edge<V>>>(&mut self, iter: T) {
        for edge in iter {
            self.add_edge(edge);
        }
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = Edge<V>;
    type IntoIter = std::vec::IntoIter<Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<V> Debug for Path<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Path")
            .field("start", &self.start)
            .field("edges", &self.edges)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path() {
        let path = Path::new("n1");
        assert_eq!(path.start(), &"n1");
        assert_eq!(path.end(), &"n1");
        assert!(path.is_empty());
        assert_eq!(path.vertices().count(), 1);
    }

    #[test]
    fn test_add_edge() {
        let mut path = Path::new("n1");
        path.add_edge(Edge::new("n1", "n2"));
        assert_eq!(path.end(), &"n2");
        assert_eq!(path.len(), 1);
        assert_eq!(path.vertices().count(), 2);
    }

    #[test]
    #[should_panic(expected = "Edge source does not match end of path")]
    fn test_add_disconnected_edge_panics() {
        let mut path = Path::new("n1");
        path.add_edge(Edge::new("n2", "n3"));
    }

    #[test]
    fn test_vertices() {
        let path = Path::from_edges("n1", [Edge::new("n1", "n2"), Edge::new("n2", "n3")]);
        assert_eq!(path.vertices().copied().collect::<Vec<_>>(), vec!["n1", "n2", "n3"]);
    }

    #[test]
    fn test_extend_with() {
        let mut path1 = Path::from_edges("n1", [Edge::new("n1", "n2")]);
        let path2 = Path::from_edges("n2", [Edge::new("n2", "n3")]);
        path1.extend_with(&path2);
        assert_eq!(path1.len(), 2);
        assert_eq!(path1.end(), &"n3");
    }

    #[test]
    fn test_debug() {
        let path = Path::from_edges(
            "n1",
            [Edge::new("n1", "n2"), Edge::new("n2", "n3"), Edge::new("n3", "n1")],
        );
        let debug_str = format!("{:?}", path);
        assert!(debug_str.contains("Path"));
        assert!(debug_str.contains("start"));
        assert!(debug_str.contains("edges"));
    }
}
