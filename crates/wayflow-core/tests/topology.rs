//! Known-topology regression tests for the navigation graph.
//!
//! Each test uses a hand-crafted edge list with known properties; expected
//! values are computed by hand and hardcoded, so any algorithm change that
//! shifts results is caught here.

use std::collections::BTreeSet;

use wayflow_core::graph::{Digraph, EdgeLabelMode, VertexRole};

fn build(edges: &[(&str, &str)]) -> Digraph {
    Digraph::from_edges(edges)
}

fn path(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(ToString::to_string).collect()
}

// ---------------------------------------------------------------------------
// Worked example from the requirements
// ---------------------------------------------------------------------------

#[test]
fn worked_example_end_to_end() {
    let g = build(&[("A", "B"), ("B", "C"), ("A", "C"), ("B", "C")]);

    assert_eq!(g.vertices(), &["A", "B", "C"]);
    assert_eq!(g.arc_weight("B", "C"), Ok(2));
    assert_eq!(g.initial_vertices(), set(&["A"]));
    assert_eq!(g.end_vertices(), set(&["C"]));
    assert_eq!(
        g.all_paths("A", "C").expect("known endpoints"),
        vec![path(&["A", "C"]), path(&["A", "B", "C"])]
    );
}

// ---------------------------------------------------------------------------
// Linear chain
// ---------------------------------------------------------------------------

#[test]
fn linear_chain() {
    // home → search → product → checkout
    let g = build(&[
        ("home", "search"),
        ("search", "product"),
        ("product", "checkout"),
    ]);

    assert_eq!(g.initial_vertices(), set(&["home"]));
    assert_eq!(g.end_vertices(), set(&["checkout"]));
    assert_eq!(
        g.all_paths("home", "checkout").expect("known endpoints"),
        vec![path(&["home", "search", "product", "checkout"])]
    );
}

// ---------------------------------------------------------------------------
// Fan-in / fan-out
// ---------------------------------------------------------------------------

#[test]
fn multiple_sources_and_sinks() {
    // {landing1, landing2} → hub → {exit1, exit2}
    let g = build(&[
        ("landing1", "hub"),
        ("landing2", "hub"),
        ("hub", "exit1"),
        ("hub", "exit2"),
    ]);

    assert_eq!(g.initial_vertices(), set(&["landing1", "landing2"]));
    assert_eq!(g.end_vertices(), set(&["exit1", "exit2"]));
    assert_eq!(
        g.all_paths("landing1", "exit2").expect("known endpoints"),
        vec![path(&["landing1", "hub", "exit2"])]
    );
}

// ---------------------------------------------------------------------------
// Cyclic traffic
// ---------------------------------------------------------------------------

#[test]
fn cycle_with_exit_enumerates_each_vertex_once() {
    // a ⇄ b with an exit b → out: the a → b → a loop is never replayed.
    let g = build(&[("a", "b"), ("b", "a"), ("b", "out")]);

    assert_eq!(
        g.all_paths("a", "out").expect("known endpoints"),
        vec![path(&["a", "b", "out"])]
    );
    // A graph where every vertex has in- and out-weight has no
    // initial/end vertices at all.
    let ring = build(&[("a", "b"), ("b", "c"), ("c", "a")]);
    assert!(ring.initial_vertices().is_empty());
    assert!(ring.end_vertices().is_empty());
}

// ---------------------------------------------------------------------------
// Subgraph extraction
// ---------------------------------------------------------------------------

#[test]
fn subgraph_composes_with_path_enumeration() {
    let g = build(&[
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("B", "C"),
    ]);

    // Cutting C removes the A→C→D and A→B→C→D routes.
    let sub = g.subgraph(["A", "B", "D"]).expect("known vertices");
    assert_eq!(
        sub.all_paths("A", "D").expect("known endpoints"),
        vec![path(&["A", "B", "D"])]
    );

    // The parent graph is untouched.
    assert_eq!(g.all_paths("A", "D").expect("known endpoints").len(), 3);
}

#[test]
fn subgraph_preserves_weights_between_retained_vertices() {
    let g = build(&[("x", "y"), ("x", "y"), ("x", "y"), ("y", "z")]);
    let sub = g.subgraph(["x", "y"]).expect("known vertices");

    assert_eq!(sub.arc_weight("x", "y"), Ok(3));
    assert_eq!(sub.total_weight(), 3);
}

// ---------------------------------------------------------------------------
// Render plan
// ---------------------------------------------------------------------------

#[test]
fn render_plan_roles_and_percent_labels() {
    let g = build(&[("A", "B"), ("B", "C"), ("A", "C"), ("B", "C")]);
    let plan = g.render_plan(EdgeLabelMode::Percent);

    assert_eq!(plan.nodes.len(), 3);
    assert_eq!(plan.nodes[0].role, VertexRole::Initial);
    assert_eq!(plan.nodes[2].role, VertexRole::Terminal);

    let labels: Vec<&str> = plan.edges.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["25.00%", "25.00%", "50.00%"]);
}

#[test]
fn path_plan_for_enumerated_route() {
    let g = build(&[("A", "B"), ("B", "C"), ("A", "C"), ("B", "C")]);
    let routes = g.all_paths("A", "C").expect("known endpoints");
    let plan = g
        .path_plan(&routes[1], EdgeLabelMode::Count)
        .expect("route from this graph");

    assert_eq!(plan.nodes.len(), 3);
    assert_eq!(plan.edges.len(), 2);
    assert_eq!(plan.edges[1].label, "2", "B→C carries weight 2");
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn empty_graph_queries_degrade_gracefully() {
    let g = Digraph::from_edges::<&str>(&[]);

    assert!(g.is_empty());
    assert!(g.initial_vertices().is_empty());
    assert!(g.end_vertices().is_empty());
    assert!(g.subgraph(Vec::<&str>::new()).expect("empty subset").is_empty());
    assert!(g.all_paths("A", "A").is_err(), "unknown vertex still errors");
}
