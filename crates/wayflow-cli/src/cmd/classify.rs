//! `wf classify` — bucket a response-time series and summarize it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;
use wayflow_core::classify::{Bands, Distribution, classify};

use crate::input::{load_series, parse_bands};

/// Arguments for `wf classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Series file, one numeric value per line.
    pub series: PathBuf,

    /// Band spec: comma-separated `label=bound` pairs plus one trailing
    /// bare catch-all label, e.g. `fast=0.5,slow=2,rest`.
    /// Defaults to the built-in five-band configuration.
    #[arg(long)]
    pub bands: Option<String>,

    /// Fraction of extreme values to trim (half per tail) before the
    /// distribution summary. Does not affect band counts.
    #[arg(long, default_value_t = 0.0)]
    pub trim: f64,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let series = load_series(&args.series)?;
    let bands = match &args.bands {
        Some(spec) => parse_bands(spec)?,
        None => Bands::default(),
    };

    let classification = classify(&series, &bands);
    let distribution = Distribution::from_series(&series, args.trim)?;

    if args.json {
        let body = json!({
            "classification": classification,
            "distribution": distribution,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", classification.summary());
        println!();
        println!("{distribution}");
    }
    Ok(())
}
