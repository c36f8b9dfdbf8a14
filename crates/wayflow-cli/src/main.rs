//! `wf` — traffic-flow analysis CLI.
//!
//! Thin driver around `wayflow-core`: loads tabular edge and series
//! files, runs the graph/classifier queries, and formats the results as
//! text, JSON, or Graphviz DOT.

mod cmd;
mod input;

use std::env;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "wf",
    version,
    about = "Navigation-path and response-time analysis for traffic-flow logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show vertex/weight counts and the initial/end vertex sets.
    Summary(cmd::summary::SummaryArgs),
    /// Enumerate all simple paths between two vertices.
    Paths(cmd::paths::PathsArgs),
    /// Emit Graphviz DOT for the graph or for one route's paths.
    Dot(cmd::dot::DotArgs),
    /// Classify a response-time series into threshold bands.
    Classify(cmd::classify::ClassifyArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WAYFLOW_LOG")
        .unwrap_or_else(|_| EnvFilter::new("wayflow_core=info,wayflow_cli=info,warn"));

    let format = env::var("WAYFLOW_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Summary(ref args) => cmd::summary::run_summary(args),
        Commands::Paths(ref args) => cmd::paths::run_paths(args),
        Commands::Dot(ref args) => cmd::dot::run_dot(args),
        Commands::Classify(ref args) => cmd::classify::run_classify(args),
    }
}
