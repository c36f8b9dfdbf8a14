//! Directed multigraph of observed navigation transitions.
//!
//! # Overview
//!
//! A [`Digraph`] composes a [`VertexIndex`] and an [`AdjacencyMatrix`] and
//! is immutable once constructed. Derived graphs ([`Digraph::subgraph`])
//! are new independent instances, never mutations, so concurrent readers
//! can share a graph freely.
//!
//! ## Construction
//!
//! The usual entry point is [`Digraph::from_edges`]: two passes over the
//! edge list, one to discover and lexicographically order the vertex set
//! (stable index assignment), one to accumulate arc weights. A repeated
//! `(origin, destination)` pair raises that arc's weight by one per
//! occurrence.
//!
//! ## Vertex references
//!
//! Operations taking a vertex accept either a name or a dense index via
//! [`VertexRef`], resolved once at the entry point.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::error::{FlowError, Result};
use crate::graph::index::VertexIndex;
use crate::graph::matrix::AdjacencyMatrix;

// ---------------------------------------------------------------------------
// VertexRef
// ---------------------------------------------------------------------------

/// A vertex parameter: either a name or a dense index.
///
/// Resolution happens once at each operation's entry point; everything
/// downstream works on indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRef<'a> {
    /// Reference by vertex name.
    Name(&'a str),
    /// Reference by dense index in `[0, N)`.
    Index(usize),
}

impl<'a> From<&'a str> for VertexRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for VertexRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for VertexRef<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

// ---------------------------------------------------------------------------
// Digraph
// ---------------------------------------------------------------------------

/// An immutable directed multigraph: indexed vertices + weight matrix.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    pub(crate) index: VertexIndex,
    pub(crate) arcs: AdjacencyMatrix,
}

/// Equality over observable state: vertex names (with their order) and
/// arc weights. Lets the full-set subgraph round-trip be asserted directly.
impl PartialEq for Digraph {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.arcs == other.arcs
    }
}

impl Digraph {
    /// Build a graph from observed `(origin, destination)` transitions.
    ///
    /// The vertex set is the deduplicated union of all endpoints, ordered
    /// lexicographically for stable index assignment. Arc weight is the
    /// occurrence count of each ordered pair. An empty edge list yields an
    /// empty graph.
    #[instrument(skip(edges))]
    #[must_use]
    pub fn from_edges<S: AsRef<str>>(edges: &[(S, S)]) -> Self {
        // Pass 1: discover the vertex set.
        let names: BTreeSet<&str> = edges
            .iter()
            .flat_map(|(origin, destination)| [origin.as_ref(), destination.as_ref()])
            .collect();
        let index = VertexIndex::from_ordered_names(names);

        // Pass 2: accumulate weights.
        let mut arcs = AdjacencyMatrix::zeros(index.len());
        for (origin, destination) in edges {
            // Both endpoints were indexed in pass 1.
            if let (Ok(i), Ok(j)) = (
                index.index_of(origin.as_ref()),
                index.index_of(destination.as_ref()),
            ) {
                arcs.increment(i, j);
            }
        }

        debug!(
            vertices = index.len(),
            total_weight = arcs.total(),
            "built digraph from edge list"
        );

        Self { index, arcs }
    }

    /// Build a graph from an explicit ordered vertex set and weight matrix.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::DuplicateVertex`] when the vertex set repeats
    /// a name, and [`FlowError::DimensionMismatch`] when the matrix
    /// dimension does not equal the vertex count.
    pub fn from_parts<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        arcs: AdjacencyMatrix,
    ) -> Result<Self> {
        let index = VertexIndex::try_from_names(names)?;
        if arcs.dim() != index.len() {
            return Err(FlowError::DimensionMismatch {
                rows: arcs.dim(),
                cols: arcs.dim(),
                vertices: index.len(),
            });
        }
        Ok(Self { index, arcs })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All vertex names in index order.
    #[must_use]
    pub fn vertices(&self) -> &[String] {
        self.index.names()
    }

    /// Total weight over all arcs.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.arcs.total()
    }

    /// Weight of the arc between two vertices (0 when absent).
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::VertexNotFound`] / [`FlowError::IndexOutOfBounds`]
    /// for unknown endpoints.
    pub fn arc_weight<'a>(
        &self,
        origin: impl Into<VertexRef<'a>>,
        destination: impl Into<VertexRef<'a>>,
    ) -> Result<u64> {
        let i = self.resolve(origin.into())?;
        let j = self.resolve(destination.into())?;
        Ok(self.arcs.get(i, j))
    }

    /// Translate a vertex reference to its dense index.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::VertexNotFound`] for unknown names and
    /// [`FlowError::IndexOutOfBounds`] for out-of-range indices.
    pub fn get_index<'a>(&self, vertex: impl Into<VertexRef<'a>>) -> Result<usize> {
        self.resolve(vertex.into())
    }

    /// Translate a dense index back to its vertex name.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::IndexOutOfBounds`] when the index is out of
    /// range.
    pub fn get_name(&self, index: usize) -> Result<&str> {
        self.index
            .name_of(index)
            .ok_or(FlowError::IndexOutOfBounds {
                index,
                len: self.index.len(),
            })
    }

    pub(crate) fn resolve(&self, vertex: VertexRef<'_>) -> Result<usize> {
        match vertex {
            VertexRef::Name(name) => self.index.index_of(name),
            VertexRef::Index(index) => {
                if index < self.index.len() {
                    Ok(index)
                } else {
                    Err(FlowError::IndexOutOfBounds {
                        index,
                        len: self.index.len(),
                    })
                }
            }
        }
    }

    /// Vertices with no inbound weight that still lead somewhere
    /// (zero inbound sum, positive outbound sum).
    #[must_use]
    pub fn initial_vertices(&self) -> BTreeSet<String> {
        self.vertices_matching(|inbound, outbound| inbound == 0 && outbound > 0)
    }

    /// Sink vertices: positive inbound weight, zero outbound weight.
    #[must_use]
    pub fn end_vertices(&self) -> BTreeSet<String> {
        self.vertices_matching(|inbound, outbound| inbound > 0 && outbound == 0)
    }

    fn vertices_matching(&self, keep: impl Fn(u64, u64) -> bool) -> BTreeSet<String> {
        (0..self.index.len())
            .filter(|&i| keep(self.arcs.in_weight(i), self.arcs.out_weight(i)))
            .filter_map(|i| self.index.name_of(i).map(str::to_string))
            .collect()
    }

    /// A new independent graph restricted to `subset`.
    ///
    /// Retained vertices keep their original relative order; weights
    /// between them are preserved unchanged and arcs touching excluded
    /// vertices are dropped. An empty subset yields an empty graph.
    ///
    /// # Errors
    ///
    /// Returns a lookup error when any requested vertex is unknown.
    #[instrument(skip(self, subset))]
    pub fn subgraph<'a, I, V>(&self, subset: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>,
    {
        let mut kept: BTreeSet<usize> = BTreeSet::new();
        for vertex in subset {
            kept.insert(self.resolve(vertex.into())?);
        }
        let kept: Vec<usize> = kept.into_iter().collect();

        let names: Vec<String> = kept
            .iter()
            .filter_map(|&i| self.index.name_of(i).map(str::to_string))
            .collect();
        let arcs = self.arcs.restrict(&kept);

        debug!(
            parent_vertices = self.index.len(),
            kept = kept.len(),
            "extracted subgraph"
        );

        Ok(Self {
            index: VertexIndex::from_ordered_names(names),
            arcs,
        })
    }
}
