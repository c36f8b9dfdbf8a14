//! `wf summary` — graph-level overview of an edge file.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use wayflow_core::graph::Digraph;

use crate::input::load_edges;

/// Arguments for `wf summary`.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Two-column edge file (origin, destination per row).
    pub edges: PathBuf,

    /// Column separator.
    #[arg(long, default_value = ",")]
    pub separator: char,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    vertices: usize,
    total_weight: u64,
    initial_vertices: BTreeSet<String>,
    end_vertices: BTreeSet<String>,
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let edges = load_edges(&args.edges, args.separator)?;
    let graph = Digraph::from_edges(&edges);

    let report = SummaryReport {
        vertices: graph.vertex_count(),
        total_weight: graph.total_weight(),
        initial_vertices: graph.initial_vertices(),
        end_vertices: graph.end_vertices(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("vertices:     {}", report.vertices);
        println!("total weight: {}", report.total_weight);
        println!("initial:      {}", join(&report.initial_vertices));
        println!("end:          {}", join(&report.end_vertices));
    }
    Ok(())
}

fn join(names: &BTreeSet<String>) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
