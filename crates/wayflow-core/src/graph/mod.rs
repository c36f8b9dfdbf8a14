//! Directed navigation graph: construction, topology queries, and
//! simple-path enumeration.
//!
//! # Pipeline
//!
//! ```text
//! (origin, destination) edge list
//!        ↓  digraph::Digraph::from_edges()   two passes: discover, weigh
//! Digraph (VertexIndex + AdjacencyMatrix, immutable)
//!        ↓  initial_vertices() / end_vertices() / subgraph()
//!        ↓  all_paths()                       exhaustive simple-path DFS
//!        ↓  render_plan() / path_plan()       export for a renderer
//! ```

pub mod digraph;
pub mod index;
pub mod matrix;
pub mod paths;
pub mod render;

// Re-export primary types at module level for convenience.
pub use digraph::{Digraph, VertexRef};
pub use index::VertexIndex;
pub use matrix::AdjacencyMatrix;
pub use render::{EdgeLabelMode, RenderEdge, RenderNode, RenderPlan, VertexRole};
