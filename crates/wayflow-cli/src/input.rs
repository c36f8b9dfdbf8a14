//! File loaders and option parsers for the CLI.
//!
//! The core engine is I/O-free; this module turns files and flag values
//! into the slices and configs it consumes. Edge files are two-column
//! tabular data (one observed transition per row); series files carry one
//! numeric value per line. Blank lines are skipped in both.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use wayflow_core::classify::Bands;

/// Load `(origin, destination)` transitions from a two-column file.
///
/// Rows with more than two columns are rejected rather than silently
/// truncated; a mis-specified separator would otherwise produce a graph of
/// garbage vertices.
pub fn load_edges(path: &Path, separator: char) -> Result<Vec<(String, String)>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read edge file {}", path.display()))?;

    let mut edges = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut columns = line.split(separator);
        match (columns.next(), columns.next(), columns.next()) {
            (Some(origin), Some(destination), None) => {
                edges.push((origin.trim().to_string(), destination.trim().to_string()));
            }
            _ => bail!(
                "{}:{}: expected exactly two {separator:?}-separated columns, got {line:?}",
                path.display(),
                line_no + 1
            ),
        }
    }
    Ok(edges)
}

/// Load a numeric series from a one-value-per-line file.
pub fn load_series(path: &Path) -> Result<Vec<f64>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read series file {}", path.display()))?;

    let mut series = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: f64 = line.parse().with_context(|| {
            format!("{}:{}: not a number: {line:?}", path.display(), line_no + 1)
        })?;
        series.push(value);
    }
    Ok(series)
}

/// Parse a `--bands` value: comma-separated `label=bound` pairs with one
/// trailing bare `label` as the catch-all, e.g. `fast=0.5,slow=2,rest`.
///
/// Ordering and catch-all rules are enforced by [`Bands::new`]; this only
/// handles the surface syntax.
pub fn parse_bands(spec: &str) -> Result<Bands> {
    let mut pairs: Vec<(String, Option<f64>)> = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            bail!("empty band entry in {spec:?}");
        }
        match part.split_once('=') {
            Some((label, bound)) => {
                let bound: f64 = bound
                    .trim()
                    .parse()
                    .with_context(|| format!("bad bound in band {part:?}"))?;
                pairs.push((label.trim().to_string(), Some(bound)));
            }
            None => pairs.push((part.to_string(), None)),
        }
    }
    Bands::new(pairs).map_err(Into::into)
}
