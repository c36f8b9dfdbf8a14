//! Bidirectional vertex name ↔ dense index mapping.
//!
//! Every graph operation works internally on dense `usize` indices into the
//! adjacency matrix; this module owns the translation layer. Indices are
//! assigned by position in the ordered name sequence handed to the
//! constructor, so constructors that start from an unordered edge list sort
//! the vertex set first (lexicographically) for reproducible assignment.

use std::collections::HashMap;

use crate::error::{FlowError, Result};

/// Immutable, bijective mapping between vertex names and `[0, N)` indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl VertexIndex {
    /// Build an index from an ordered sequence of already-unique names.
    ///
    /// Each name gets the 0-based index of its position in the sequence.
    /// Duplicate names would break bijectivity; callers on this path
    /// deduplicate first (edge-list construction goes through a set,
    /// subgraphs keep a subset of an already-bijective index), backed by
    /// a debug assertion. Caller-supplied vertex sets go through
    /// [`Self::try_from_names`] instead, which validates.
    #[must_use]
    pub fn from_ordered_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let previous = positions.insert(name.clone(), i);
            debug_assert!(previous.is_none(), "duplicate vertex name {name:?}");
        }
        Self { names, positions }
    }

    /// Build an index from caller-supplied names, validating uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::DuplicateVertex`] naming the first repeated
    /// name.
    pub fn try_from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), i).is_some() {
                return Err(FlowError::DuplicateVertex(name.clone()));
            }
        }
        Ok(Self { names, positions })
    }

    /// Number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no vertices are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` when `name` has an assigned index.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Look up the index assigned to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::VertexNotFound`] when the name is absent.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| FlowError::VertexNotFound(name.to_string()))
    }

    /// Inverse lookup: the name assigned to `index`, if in range.
    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All names in index order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_indices_by_position() {
        let index = VertexIndex::from_ordered_names(["a", "b", "c"]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.index_of("a"), Ok(0));
        assert_eq!(index.index_of("b"), Ok(1));
        assert_eq!(index.index_of("c"), Ok(2));
    }

    #[test]
    fn inverse_lookup_round_trips() {
        let index = VertexIndex::from_ordered_names(["home", "cart", "checkout"]);

        for name in index.names().to_vec() {
            let i = index.index_of(&name).expect("indexed name");
            assert_eq!(index.name_of(i), Some(name.as_str()));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let index = VertexIndex::from_ordered_names(["a"]);

        assert_eq!(
            index.index_of("missing"),
            Err(FlowError::VertexNotFound("missing".to_string()))
        );
    }

    #[test]
    fn out_of_range_index_is_none() {
        let index = VertexIndex::from_ordered_names(["a"]);
        assert_eq!(index.name_of(1), None);
    }

    #[test]
    fn try_from_names_accepts_unique_names() {
        let index = VertexIndex::try_from_names(["a", "b"]).expect("unique");
        assert_eq!(index.index_of("b"), Ok(1));
    }

    #[test]
    fn try_from_names_rejects_duplicates() {
        assert_eq!(
            VertexIndex::try_from_names(["a", "b", "a"]),
            Err(FlowError::DuplicateVertex("a".to_string()))
        );
    }

    #[test]
    fn empty_index() {
        let index = VertexIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(!index.contains("a"));
    }
}
