//! Exhaustive simple-path enumeration.
//!
//! # Algorithm
//!
//! Depth-first search over the outbound matrix entries of the current
//! vertex. A step advances to neighbor `v` only when `weight(current, v) >
//! 0`, `v != current` (self-loops are never traversed), and `v` is not
//! already on the path-so-far (cycle avoidance by membership test —
//! O(path length) per step, fine at this scale). Every recursive call
//! pushes completed paths into one shared accumulator, so the result is
//! always a flat list of whole paths.
//!
//! # Performance caveat
//!
//! Enumeration is combinatorial: on densely connected graphs the number of
//! simple paths grows exponentially with the vertex count. Recursion depth
//! itself is bounded by the vertex count (a simple path cannot revisit a
//! vertex), but callers needing bounded runtime on near-complete graphs
//! must impose an external path-count cap.

use tracing::debug;

use crate::error::Result;
use crate::graph::digraph::{Digraph, VertexRef};

impl Digraph {
    /// All simple directed paths from `initial` to `end`, as vertex-name
    /// sequences including both endpoints.
    ///
    /// Results are deterministic: ordered by path length, then
    /// lexicographically. `initial == end` yields the single degenerate
    /// path `[initial]` (a terminal match — no self-loop traversal is
    /// required or performed). When no path exists, the result is empty;
    /// unreachable or disconnected inputs are not errors.
    ///
    /// # Errors
    ///
    /// Returns a lookup error when either endpoint is unknown.
    pub fn all_paths<'a>(
        &self,
        initial: impl Into<VertexRef<'a>>,
        end: impl Into<VertexRef<'a>>,
    ) -> Result<Vec<Vec<String>>> {
        let initial = self.resolve(initial.into())?;
        let end = self.resolve(end.into())?;

        let mut found: Vec<Vec<usize>> = Vec::new();
        let mut path: Vec<usize> = Vec::new();
        self.walk(initial, end, &mut path, &mut found);

        found.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        debug!(paths = found.len(), "enumerated simple paths");

        // Translate indices back to names.
        Ok(found
            .into_iter()
            .map(|indices| {
                indices
                    .into_iter()
                    .filter_map(|i| self.index.name_of(i).map(str::to_string))
                    .collect()
            })
            .collect())
    }

    /// DFS step: `current` is on the path; record or extend.
    fn walk(
        &self,
        current: usize,
        end: usize,
        path: &mut Vec<usize>,
        found: &mut Vec<Vec<usize>>,
    ) {
        path.push(current);

        if current == end {
            found.push(path.clone());
        } else {
            for (neighbor, &weight) in self.arcs.row(current).iter().enumerate() {
                if weight > 0 && neighbor != current && !path.contains(&neighbor) {
                    self.walk(neighbor, end, path, found);
                }
            }
        }

        path.pop();
    }
}
