//! Dense adjacency matrix of arc multiplicities.
//!
//! `get(i, j)` is the number of observed transitions from vertex `i` to
//! vertex `j`. The matrix is square with one row/column per indexed vertex,
//! stored row-major in a single `Vec<u64>`. Weights are counts, so
//! non-negativity holds by type. The matrix is a directed multigraph count
//! and is not generally symmetric. Self-loops (`i == j`) may be stored;
//! traversal code skips them.

use crate::error::{FlowError, Result};

/// Square matrix of non-negative arc weights, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    dim: usize,
    weights: Vec<u64>,
}

impl AdjacencyMatrix {
    /// An all-zero `dim` × `dim` matrix.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            weights: vec![0; dim * dim],
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::DimensionMismatch`] unless every row has
    /// exactly `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let dim = rows.len();
        for row in &rows {
            if row.len() != dim {
                return Err(FlowError::DimensionMismatch {
                    rows: dim,
                    cols: row.len(),
                    vertices: dim,
                });
            }
        }
        Ok(Self {
            dim,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// Matrix dimension (vertex count).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Weight of the arc `i → j`. Out-of-range positions read as 0.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        if i >= self.dim || j >= self.dim {
            return 0;
        }
        self.weights[i * self.dim + j]
    }

    /// Add one observation of the arc `i → j`.
    ///
    /// Indices are bounds-checked by the caller (construction resolves
    /// names to indices before incrementing).
    pub fn increment(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.dim && j < self.dim);
        self.weights[i * self.dim + j] += 1;
    }

    /// Outbound row of vertex `i`: weights of `i → 0..dim`.
    ///
    /// # Panics
    ///
    /// Panics when `i >= dim`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[u64] {
        &self.weights[i * self.dim..(i + 1) * self.dim]
    }

    /// Sum of outbound weights of vertex `i`.
    #[must_use]
    pub fn out_weight(&self, i: usize) -> u64 {
        self.row(i).iter().sum()
    }

    /// Sum of inbound weights of vertex `j`.
    #[must_use]
    pub fn in_weight(&self, j: usize) -> u64 {
        (0..self.dim).map(|i| self.get(i, j)).sum()
    }

    /// Total weight over all arcs.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// Restrict the matrix to the given indices, in the given order.
    ///
    /// Keeps exactly the rows and columns listed in `kept`; weights between
    /// retained vertices are preserved unchanged, arcs touching dropped
    /// vertices disappear. Callers pass indices in original relative order
    /// so that restriction composes with index reassignment.
    #[must_use]
    pub fn restrict(&self, kept: &[usize]) -> Self {
        let mut out = Self::zeros(kept.len());
        for (new_i, &old_i) in kept.iter().enumerate() {
            for (new_j, &old_j) in kept.iter().enumerate() {
                let w = self.get(old_i, old_j);
                if w > 0 {
                    out.weights[new_i * out.dim + new_j] = w;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_is_all_zero() {
        let m = AdjacencyMatrix::zeros(3);
        assert_eq!(m.dim(), 3);
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn increment_accumulates_multiplicity() {
        let mut m = AdjacencyMatrix::zeros(2);
        m.increment(0, 1);
        m.increment(0, 1);
        m.increment(1, 0);

        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 1);
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.total(), 3);
    }

    #[test]
    fn row_and_column_sums() {
        // 0 → 1 (weight 2), 0 → 2 (weight 1), 2 → 1 (weight 3)
        let mut m = AdjacencyMatrix::zeros(3);
        m.increment(0, 1);
        m.increment(0, 1);
        m.increment(0, 2);
        m.increment(2, 1);
        m.increment(2, 1);
        m.increment(2, 1);

        assert_eq!(m.out_weight(0), 3);
        assert_eq!(m.out_weight(1), 0);
        assert_eq!(m.out_weight(2), 3);
        assert_eq!(m.in_weight(0), 0);
        assert_eq!(m.in_weight(1), 5);
        assert_eq!(m.in_weight(2), 1);
        assert_eq!(m.row(0), &[0, 2, 1]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![0]]);
        assert_eq!(
            err,
            Err(FlowError::DimensionMismatch {
                rows: 2,
                cols: 1,
                vertices: 2
            })
        );
    }

    #[test]
    fn restrict_preserves_retained_weights() {
        // 3x3 with arcs 0→1 (1), 1→2 (4), 0→2 (2)
        let m = AdjacencyMatrix::from_rows(vec![
            vec![0, 1, 2],
            vec![0, 0, 4],
            vec![0, 0, 0],
        ])
        .expect("square");

        // Keep vertices 0 and 2: the 1→2 arcs vanish, 0→2 survives.
        let r = m.restrict(&[0, 2]);
        assert_eq!(r.dim(), 2);
        assert_eq!(r.get(0, 1), 2);
        assert_eq!(r.get(1, 0), 0);
        assert_eq!(r.total(), 2);
    }

    #[test]
    fn restrict_to_empty_is_empty() {
        let m = AdjacencyMatrix::zeros(2);
        let r = m.restrict(&[]);
        assert_eq!(r.dim(), 0);
        assert_eq!(r.total(), 0);
    }

    #[test]
    fn out_of_range_get_reads_zero() {
        let m = AdjacencyMatrix::zeros(1);
        assert_eq!(m.get(5, 0), 0);
        assert_eq!(m.get(0, 5), 0);
    }
}
