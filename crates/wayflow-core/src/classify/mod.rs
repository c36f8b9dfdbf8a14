//! Response-time classification and distribution summary.
//!
//! Two independent consumers of a raw numeric series:
//!
//! - [`classify`] buckets every value into ordered threshold [`Bands`]
//!   (per-label counts, 100% coverage, no double counting).
//! - [`Distribution`] summarizes the series (mean, standard deviation,
//!   median, extremes) with optional spurious-tail trimming.

pub mod bands;
pub mod distribution;

use std::fmt;

use serde::Serialize;
use tracing::debug;

pub use bands::{Band, Bands};
pub use distribution::Distribution;

/// Per-label counts for one classified series.
///
/// Counts appear in band order and always sum to the input length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    counts: Vec<(String, usize)>,
    total: usize,
}

/// Bucket `series` into `bands`.
///
/// Each value lands in the first band (ascending bounds) whose exclusive
/// upper bound exceeds it, or in the catch-all when no bound does. The
/// series does not need to be sorted. An empty series produces all-zero
/// counts.
#[must_use]
pub fn classify(series: &[f64], bands: &Bands) -> Classification {
    let mut counts: Vec<(String, usize)> = bands
        .as_slice()
        .iter()
        .map(|band| (band.label.clone(), 0))
        .collect();

    for &value in series {
        let label = bands.label_for(value);
        if let Some(entry) = counts.iter_mut().find(|(l, _)| l == label) {
            entry.1 += 1;
        }
    }

    debug!(values = series.len(), bands = counts.len(), "classified series");

    Classification {
        counts,
        total: series.len(),
    }
}

impl Classification {
    /// `(label, count)` pairs in band order.
    #[must_use]
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    /// Count for one label, if the label exists in the band set.
    #[must_use]
    pub fn count_for(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    /// Number of classified values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Human-readable summary: one `label: count (pct%)` line per band.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Classification {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, count)) in self.counts.iter().enumerate() {
            let pct = if self.total == 0 {
                0.0
            } else {
                *count as f64 * 100.0 / self.total as f64
            };
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {count} ({pct:.2}%)")?;
        }
        Ok(())
    }
}
