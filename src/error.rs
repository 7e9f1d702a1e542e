use std::fmt::Debug;

use thiserror::Error;

use crate::search::ParsePathMethodError;

/// Errors reported by graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V: Debug> {
    /// An edge was added with an endpoint that is not a registered vertex.
    #[error("vertex not found in graph: {0:?}")]
    VertexNotFound(V),

    /// Path reconstruction found a back-graph that is not a tree rooted at
    /// the search start.  This indicates a bug in the search itself.
    #[error("bad back graph: {0}")]
    BadBackGraph(String),

    /// A traversal method name did not match any supported method.
    #[error(transparent)]
    UnsupportedMethod(#[from] ParsePathMethodError),
}

pub type GraphResult<T, V> = Result<T, GraphError<V>>;
