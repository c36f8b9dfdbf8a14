//! Error taxonomy for the wayflow engine.
//!
//! Lookup and configuration failures are reported immediately through
//! [`FlowError`]; queries that legitimately yield nothing (no path between
//! two vertices, empty edge list, empty subgraph request) return empty
//! collections instead of erroring.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors produced by graph construction, vertex lookup, and classifier
/// configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// A queried vertex name has no assigned index.
    #[error("vertex not found: {0:?}")]
    VertexNotFound(String),

    /// An explicitly supplied vertex set names the same vertex twice,
    /// which would break the name ↔ index bijection.
    #[error("duplicate vertex name: {0:?}")]
    DuplicateVertex(String),

    /// A vertex index is outside `[0, len)`.
    #[error("vertex index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of vertices in the graph.
        len: usize,
    },

    /// An explicitly supplied matrix does not match the vertex set.
    #[error("matrix is {rows}x{cols} but the graph has {vertices} vertices")]
    DimensionMismatch {
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
        /// Vertex count the matrix must match.
        vertices: usize,
    },

    /// Classifier band configuration is invalid (missing or duplicate
    /// catch-all, non-monotonic bounds, non-finite bound, no bands).
    #[error("invalid threshold bands: {0}")]
    InvalidThreshold(String),

    /// Spurious-trim fraction outside `[0, 1)`.
    #[error("trim fraction {0} must lie in [0, 1)")]
    InvalidTrim(f64),
}

#[cfg(test)]
mod tests {
    use super::FlowError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = FlowError::VertexNotFound("checkout".to_string());
        assert_eq!(err.to_string(), "vertex not found: \"checkout\"");

        let err = FlowError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "vertex index 7 out of bounds for 3 vertices");

        let err = FlowError::DimensionMismatch {
            rows: 2,
            cols: 3,
            vertices: 2,
        };
        assert_eq!(err.to_string(), "matrix is 2x3 but the graph has 2 vertices");
    }
}
