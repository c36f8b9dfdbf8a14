//! Renderable node/edge export for an external drawing collaborator.
//!
//! The core never renders anything itself; it hands the renderer a
//! [`RenderPlan`]: every vertex tagged with its topological role and every
//! arc carrying a label, either the raw observation count or its share of
//! the total matrix weight. What the collaborator does with roles (fill
//! colors, shapes) is its own business.

use serde::Serialize;

use crate::error::Result;
use crate::graph::digraph::Digraph;

/// Topological role of a vertex, for styling by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexRole {
    /// Outbound arcs only (a traffic entry point).
    Initial,
    /// Inbound arcs only (a traffic sink).
    Terminal,
    /// Everything else.
    Intermediate,
}

/// How arc labels are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeLabelMode {
    /// Raw observation count.
    #[default]
    Count,
    /// Percentage of total matrix weight, formatted `"12.34%"`.
    Percent,
}

/// A vertex entry in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    /// Vertex name.
    pub name: String,
    /// Styling role.
    pub role: VertexRole,
}

/// A directed arc entry in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEdge {
    /// Origin vertex name.
    pub from: String,
    /// Destination vertex name.
    pub to: String,
    /// Pre-formatted weight label.
    pub label: String,
}

/// Everything a renderer needs: nodes with roles, arcs with labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RenderPlan {
    /// Vertices in index order.
    pub nodes: Vec<RenderNode>,
    /// Arcs of positive weight, in row-major order.
    pub edges: Vec<RenderEdge>,
}

#[allow(clippy::cast_precision_loss)]
fn format_label(weight: u64, total: u64, mode: EdgeLabelMode) -> String {
    match mode {
        EdgeLabelMode::Count => weight.to_string(),
        EdgeLabelMode::Percent => {
            let pct = if total == 0 {
                0.0
            } else {
                weight as f64 * 100.0 / total as f64
            };
            format!("{pct:.2}%")
        }
    }
}

impl Digraph {
    /// Export the whole graph as a [`RenderPlan`].
    #[must_use]
    pub fn render_plan(&self, mode: EdgeLabelMode) -> RenderPlan {
        let initial = self.initial_vertices();
        let terminal = self.end_vertices();

        let nodes = self
            .vertices()
            .iter()
            .map(|name| RenderNode {
                name: name.clone(),
                role: if initial.contains(name) {
                    VertexRole::Initial
                } else if terminal.contains(name) {
                    VertexRole::Terminal
                } else {
                    VertexRole::Intermediate
                },
            })
            .collect();

        let total = self.total_weight();
        let mut edges = Vec::new();
        for i in 0..self.vertex_count() {
            for (j, &weight) in self.arcs.row(i).iter().enumerate() {
                if weight > 0 {
                    edges.push(RenderEdge {
                        from: self.vertices()[i].clone(),
                        to: self.vertices()[j].clone(),
                        label: format_label(weight, total, mode),
                    });
                }
            }
        }

        RenderPlan { nodes, edges }
    }

    /// Export one enumerated path as a [`RenderPlan`].
    ///
    /// The first vertex is tagged [`VertexRole::Initial`], the last
    /// [`VertexRole::Terminal`], everything between
    /// [`VertexRole::Intermediate`]. A single-vertex path gets one
    /// `Initial` node and no edges. Labels use the weight of each
    /// consecutive arc against the full graph's total weight.
    ///
    /// # Errors
    ///
    /// Returns a lookup error when the path mentions an unknown vertex.
    pub fn path_plan(&self, path: &[String], mode: EdgeLabelMode) -> Result<RenderPlan> {
        let last = path.len().saturating_sub(1);
        let mut nodes = Vec::with_capacity(path.len());
        for (position, name) in path.iter().enumerate() {
            // Validate membership even for single-vertex paths.
            self.get_index(name)?;
            nodes.push(RenderNode {
                name: name.clone(),
                role: match position {
                    0 => VertexRole::Initial,
                    p if p == last => VertexRole::Terminal,
                    _ => VertexRole::Intermediate,
                },
            });
        }

        let total = self.total_weight();
        let mut edges = Vec::with_capacity(last);
        for pair in path.windows(2) {
            let weight = self.arc_weight(&pair[0], &pair[1])?;
            if weight > 0 {
                edges.push(RenderEdge {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    label: format_label(weight, total, mode),
                });
            }
        }

        Ok(RenderPlan { nodes, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Digraph {
        Digraph::from_edges(&[("A", "B"), ("B", "C"), ("A", "C"), ("B", "C")])
    }

    #[test]
    fn roles_partition_the_vertex_set() {
        let plan = example().render_plan(EdgeLabelMode::Count);

        let roles: Vec<(&str, VertexRole)> = plan
            .nodes
            .iter()
            .map(|n| (n.name.as_str(), n.role))
            .collect();
        assert_eq!(
            roles,
            vec![
                ("A", VertexRole::Initial),
                ("B", VertexRole::Intermediate),
                ("C", VertexRole::Terminal),
            ]
        );
    }

    #[test]
    fn count_labels_are_raw_weights() {
        let plan = example().render_plan(EdgeLabelMode::Count);

        let bc = plan
            .edges
            .iter()
            .find(|e| e.from == "B" && e.to == "C")
            .expect("B→C present");
        assert_eq!(bc.label, "2");
        assert_eq!(plan.edges.len(), 3, "only positive-weight arcs exported");
    }

    #[test]
    fn percent_labels_share_total_weight() {
        let plan = example().render_plan(EdgeLabelMode::Percent);

        let bc = plan
            .edges
            .iter()
            .find(|e| e.from == "B" && e.to == "C")
            .expect("B→C present");
        assert_eq!(bc.label, "50.00%");
    }

    #[test]
    fn empty_graph_renders_empty_plan() {
        let g = Digraph::from_edges::<&str>(&[]);
        assert_eq!(g.render_plan(EdgeLabelMode::Count), RenderPlan::default());
    }

    #[test]
    fn path_plan_tags_endpoints() {
        let g = example();
        let path = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let plan = g.path_plan(&path, EdgeLabelMode::Count).expect("known path");

        assert_eq!(plan.nodes[0].role, VertexRole::Initial);
        assert_eq!(plan.nodes[1].role, VertexRole::Intermediate);
        assert_eq!(plan.nodes[2].role, VertexRole::Terminal);
        assert_eq!(plan.edges.len(), 2);
    }

    #[test]
    fn single_vertex_path_plan() {
        let g = example();
        let plan = g
            .path_plan(&["A".to_string()], EdgeLabelMode::Count)
            .expect("known vertex");
        assert_eq!(plan.nodes.len(), 1);
        assert_eq!(plan.nodes[0].role, VertexRole::Initial);
        assert!(plan.edges.is_empty());
    }

    #[test]
    fn path_plan_rejects_unknown_vertices() {
        let g = example();
        assert!(g
            .path_plan(&["A".to_string(), "Z".to_string()], EdgeLabelMode::Count)
            .is_err());
    }

    #[test]
    fn plan_serializes_for_external_renderers() {
        let plan = example().render_plan(EdgeLabelMode::Count);
        let json = serde_json::to_value(&plan).expect("serializable");
        assert_eq!(json["nodes"][0]["role"], "initial");
    }
}
