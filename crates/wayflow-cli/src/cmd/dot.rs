//! `wf dot` — Graphviz DOT text for the whole graph or one route.
//!
//! The core exports a role-tagged node/edge plan; this command is the
//! display wrapper that turns roles into fill colors (entry vertices
//! green, exits blue, everything else grey).

use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use wayflow_core::graph::{Digraph, EdgeLabelMode, RenderPlan, VertexRole};

use crate::input::load_edges;

/// Arguments for `wf dot`.
#[derive(Args, Debug)]
pub struct DotArgs {
    /// Two-column edge file (origin, destination per row).
    pub edges: PathBuf,

    /// Label arcs with their percentage of total weight instead of counts.
    #[arg(long)]
    pub percent: bool,

    /// Render only the simple paths between these two vertices
    /// (one digraph block per path).
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    pub path: Option<Vec<String>>,

    /// Column separator.
    #[arg(long, default_value = ",")]
    pub separator: char,
}

pub fn run_dot(args: &DotArgs) -> Result<()> {
    let edges = load_edges(&args.edges, args.separator)?;
    let graph = Digraph::from_edges(&edges);
    let mode = if args.percent {
        EdgeLabelMode::Percent
    } else {
        EdgeLabelMode::Count
    };

    match &args.path {
        Some(endpoints) => {
            // clap guarantees exactly two values.
            let routes = graph.all_paths(endpoints[0].as_str(), endpoints[1].as_str())?;
            for route in &routes {
                let plan = graph.path_plan(route, mode)?;
                println!("{}", dot_text(&plan)?);
            }
        }
        None => {
            let plan = graph.render_plan(mode);
            println!("{}", dot_text(&plan)?);
        }
    }
    Ok(())
}

const fn fill_color(role: VertexRole) -> &'static str {
    match role {
        VertexRole::Initial => "#4CAF50",
        VertexRole::Terminal => "#2196F3",
        VertexRole::Intermediate => "#9E9E9E",
    }
}

const fn font_color(role: VertexRole) -> &'static str {
    match role {
        VertexRole::Initial | VertexRole::Terminal => "#FFFFFF",
        VertexRole::Intermediate => "#000000",
    }
}

fn dot_text(plan: &RenderPlan) -> Result<String> {
    let mut out = String::from("digraph flow {\n");
    for node in &plan.nodes {
        writeln!(
            out,
            "  {:?} [style=filled, fillcolor={:?}, fontcolor={:?}];",
            node.name,
            fill_color(node.role),
            font_color(node.role),
        )?;
    }
    for edge in &plan.edges {
        writeln!(out, "  {:?} -> {:?} [label={:?}];", edge.from, edge.to, edge.label)?;
    }
    out.push('}');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_text_contains_roles_and_labels() {
        let graph = Digraph::from_edges(&[("A", "B"), ("B", "C"), ("A", "C"), ("B", "C")]);
        let text = dot_text(&graph.render_plan(EdgeLabelMode::Count)).expect("formats");

        assert!(text.starts_with("digraph flow {"));
        assert!(text.contains(r##""A" [style=filled, fillcolor="#4CAF50""##));
        assert!(text.contains(r##""C" [style=filled, fillcolor="#2196F3""##));
        assert!(text.contains(r#""B" -> "C" [label="2"];"#));
        assert!(text.ends_with('}'));
    }
}
