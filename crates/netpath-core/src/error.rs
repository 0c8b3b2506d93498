//! Error types for graph store and query operations

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by the graph store and the query engines.
///
/// An unreachable vertex is not an error: it is a normal outcome of a
/// shortest-path run and is reported through [`crate::PathReport`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// No vertex is registered under this name.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// No directed edge exists between the two named vertices.
    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    /// Weights must be finite and non-negative.
    #[error("invalid edge weight: {0}")]
    InvalidWeight(f64),
}

impl GraphError {
    pub fn edge_not_found(source: &str, destination: &str) -> Self {
        GraphError::EdgeNotFound {
            from: source.to_string(),
            to: destination.to_string(),
        }
    }
}
