// src/export.rs
//! JSON handoff for downstream graph rendering.
//!
//! The rendering side only needs nodes, edges, and weights; layout and
//! drawing are its problem. Output ordering is sorted so repeated dumps
//! of the same graph are byte-identical.

use serde::Serialize;

use crate::graph::PairingGraph;

/// A graph flattened for export: node list plus one entry per
/// undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDump {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDump {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

impl GraphDump {
    /// Flattens a graph, sorting nodes and edges for stable output.
    #[must_use]
    pub fn from_graph(graph: &PairingGraph) -> Self {
        let mut nodes: Vec<String> = graph.nodes().map(str::to_string).collect();
        nodes.sort();

        let mut edges: Vec<EdgeDump> = graph
            .edges()
            .map(|(a, b, weight)| EdgeDump {
                a: a.to_string(),
                b: b.to_string(),
                weight,
            })
            .collect();
        edges.sort_by(|x, y| x.a.cmp(&y.a).then_with(|| x.b.cmp(&y.b)));

        Self { nodes, edges }
    }

    /// Renders the dump as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
