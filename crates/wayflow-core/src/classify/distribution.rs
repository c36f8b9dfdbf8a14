//! Summary statistics for a response-time series.
//!
//! Observed series often carry a few wild outliers (timeouts, cold
//! caches); [`Distribution::from_series`] can symmetrically trim a
//! fraction of extreme values from both tails before computing statistics.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{FlowError, Result};

/// Sorted-series summary: mean, population standard deviation, median,
/// extremes, and the retained sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Distribution {
    /// Values retained after trimming.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Middle value of the sorted retained series.
    pub median: f64,
    /// Smallest retained value.
    pub min: f64,
    /// Largest retained value.
    pub max: f64,
}

impl Distribution {
    /// Summarize `series`, trimming a `trim` fraction of extreme values
    /// (half from each tail) after sorting.
    ///
    /// `trim = 0.0` keeps everything. An empty series (before or after
    /// trimming) yields zeroed statistics rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidTrim`] when `trim` is outside `[0, 1)`.
    pub fn from_series(series: &[f64], trim: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&trim) {
            return Err(FlowError::InvalidTrim(trim));
        }

        let mut sorted: Vec<f64> = series.to_vec();
        sorted.sort_by(f64::total_cmp);

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let per_tail = (sorted.len() as f64 * trim / 2.0) as usize;
        let retained: &[f64] = if per_tail * 2 >= sorted.len() {
            &[]
        } else {
            &sorted[per_tail..sorted.len() - per_tail]
        };

        debug!(
            input = series.len(),
            retained = retained.len(),
            trim,
            "summarized series"
        );

        if retained.is_empty() {
            return Ok(Self::default());
        }

        #[allow(clippy::cast_precision_loss)]
        let n = retained.len() as f64;
        let mean = retained.iter().sum::<f64>() / n;
        let variance = retained.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            count: retained.len(),
            mean,
            std_dev: variance.sqrt(),
            median: retained[retained.len() / 2],
            min: retained[0],
            max: retained[retained.len() - 1],
        })
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Max: {}\nMin: {}\nMean: {}\nStandard Deviation: {}\nMedian: {}",
            self.max, self.min, self.mean, self.std_dev, self.median
        )
    }
}
