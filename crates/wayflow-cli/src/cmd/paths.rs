//! `wf paths` — enumerate simple paths between two vertices.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;
use wayflow_core::graph::Digraph;

use crate::input::load_edges;

/// Arguments for `wf paths`.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Two-column edge file (origin, destination per row).
    pub edges: PathBuf,

    /// Initial vertex name.
    #[arg(long = "from")]
    pub from: String,

    /// End vertex name.
    #[arg(long = "to")]
    pub to: String,

    /// Column separator.
    #[arg(long, default_value = ",")]
    pub separator: char,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_paths(args: &PathsArgs) -> Result<()> {
    let edges = load_edges(&args.edges, args.separator)?;
    let graph = Digraph::from_edges(&edges);
    let paths = graph.all_paths(args.from.as_str(), args.to.as_str())?;

    if args.json {
        let body = json!({
            "from": args.from,
            "to": args.to,
            "count": paths.len(),
            "paths": paths,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else if paths.is_empty() {
        println!("no path from {} to {}", args.from, args.to);
    } else {
        for path in &paths {
            println!("{}", path.join(" -> "));
        }
    }
    Ok(())
}
