pub mod adjacency_graph;
pub mod edge;
pub mod edge_list;
pub mod error;
pub mod graph;
pub mod path;
pub mod search;
pub mod tracing_support;

#[doc(hidden)]
pub mod graph_test_support;

pub use crate::adjacency_graph::AdjacencyGraph;
pub use crate::edge::Edge;
pub use crate::error::{GraphError, GraphResult};
pub use crate::graph::Graph;
pub use crate::path::Path;
pub use crate::search::{BfsIterator, ParsePathMethodError, PathMethod};

/// Creates an empty graph using the default implementation.
pub fn create_default_graph<V>() -> AdjacencyGraph<V>
where
    V: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    AdjacencyGraph::new()
}
