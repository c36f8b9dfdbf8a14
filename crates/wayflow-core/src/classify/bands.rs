//! Ordered threshold bands for response-time classification.
//!
//! A band list is an explicit configuration value: labels paired with
//! exclusive upper bounds, evaluated lowest bound first, closed by exactly
//! one unbounded catch-all band that absorbs everything above the highest
//! bound. Validation happens once at construction; classification never
//! needs to re-check.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{FlowError, Result};

/// One labeled band: values strictly below `upper_bound` belong here.
/// `upper_bound == None` marks the catch-all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// Class label.
    pub label: String,
    /// Exclusive upper bound; `None` for the catch-all.
    pub upper_bound: Option<f64>,
}

/// Validated, ordered band configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bands {
    bands: Vec<Band>,
}

impl Bands {
    /// Build a band list from `(label, upper bound)` pairs.
    ///
    /// Requirements: at least one band; labels unique; exactly one
    /// catch-all (`None` bound) and it must come last; bounds finite and
    /// strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidThreshold`] describing the first
    /// violated requirement.
    pub fn new<S: Into<String>>(bands: Vec<(S, Option<f64>)>) -> Result<Self> {
        let bands: Vec<Band> = bands
            .into_iter()
            .map(|(label, upper_bound)| Band {
                label: label.into(),
                upper_bound,
            })
            .collect();

        if bands.is_empty() {
            return Err(FlowError::InvalidThreshold("no bands supplied".to_string()));
        }

        let mut labels = HashSet::new();
        for band in &bands {
            if !labels.insert(band.label.as_str()) {
                return Err(FlowError::InvalidThreshold(format!(
                    "duplicate band label {:?}",
                    band.label
                )));
            }
        }

        let catch_all_count = bands.iter().filter(|b| b.upper_bound.is_none()).count();
        if catch_all_count == 0 {
            return Err(FlowError::InvalidThreshold(
                "one unbounded catch-all band is required".to_string(),
            ));
        }
        if catch_all_count > 1 {
            return Err(FlowError::InvalidThreshold(format!(
                "{catch_all_count} unbounded catch-all bands, expected exactly one"
            )));
        }
        if bands
            .last()
            .is_some_and(|band| band.upper_bound.is_some())
        {
            return Err(FlowError::InvalidThreshold(
                "the catch-all band must come last".to_string(),
            ));
        }

        let mut previous: Option<f64> = None;
        for band in &bands {
            let Some(bound) = band.upper_bound else { break };
            if !bound.is_finite() {
                return Err(FlowError::InvalidThreshold(format!(
                    "bound for {:?} is not finite",
                    band.label
                )));
            }
            if previous.is_some_and(|p| bound <= p) {
                return Err(FlowError::InvalidThreshold(format!(
                    "bounds must strictly increase, {:?} breaks the order",
                    band.label
                )));
            }
            previous = Some(bound);
        }

        Ok(Self { bands })
    }

    /// Bands in evaluation order (ascending bounds, catch-all last).
    #[must_use]
    pub fn as_slice(&self) -> &[Band] {
        &self.bands
    }

    /// Label of the band `value` falls into: the first band whose bound
    /// exceeds the value, else the catch-all.
    #[must_use]
    pub fn label_for(&self, value: f64) -> &str {
        for band in &self.bands {
            match band.upper_bound {
                Some(bound) if value < bound => return &band.label,
                Some(_) => {}
                None => return &band.label,
            }
        }
        // Unreachable: validation guarantees a trailing catch-all.
        &self.bands[self.bands.len() - 1].label
    }
}

/// Default five-band configuration for response times in seconds.
impl Default for Bands {
    fn default() -> Self {
        Self {
            bands: vec![
                Band {
                    label: "excellent".to_string(),
                    upper_bound: Some(0.4),
                },
                Band {
                    label: "good".to_string(),
                    upper_bound: Some(1.0),
                },
                Band {
                    label: "ok".to_string(),
                    upper_bound: Some(1.5),
                },
                Band {
                    label: "bad".to_string(),
                    upper_bound: Some(3.0),
                },
                Band {
                    label: "ugly".to_string(),
                    upper_bound: None,
                },
            ],
        }
    }
}
