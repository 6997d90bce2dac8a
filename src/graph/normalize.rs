// src/graph/normalize.rs
//! Edge weight normalization strategies.
//!
//! Raw co-occurrence counts are dominated by hub ingredients (gin, lemon
//! juice, sugar...). Each strategy rescales edge weights into comparable
//! scores in one pass. Strategies are mutually exclusive; pick one.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::Deserialize;

use super::PairingGraph;

/// How raw co-occurrence counts are rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Divide by the summed incident weight of both endpoints. Penalizes
    /// edges attached to hub ingredients relative to rarer pairings.
    #[default]
    RelativeDegree,
    /// Divide by 1 + the normalized degree centrality of both endpoints.
    Centrality,
    /// Multiply by the reciprocal of the endpoints' combined degree,
    /// favoring ingredients with few connections.
    Rarity,
}

impl Strategy {
    /// Rewrites every edge weight under this strategy, returning a new
    /// graph. Topology is untouched: no edges or nodes appear or vanish.
    ///
    /// Denominators are computed from the input graph as it stood before
    /// any edge was rewritten, so edge iteration order cannot change the
    /// result.
    #[must_use]
    pub fn apply(self, graph: &PairingGraph) -> PairingGraph {
        match self {
            Strategy::RelativeDegree => relative_degree(graph),
            Strategy::Centrality => centrality(graph),
            Strategy::Rarity => rarity(graph),
        }
    }
}

fn relative_degree(graph: &PairingGraph) -> PairingGraph {
    let totals: HashMap<&str, f64> = graph
        .nodes()
        .map(|n| (n, graph.incident_weight(n)))
        .collect();

    rewrite(graph, |a, b, w| {
        let denom = totals.get(a).copied().unwrap_or(0.0) + totals.get(b).copied().unwrap_or(0.0);
        if denom > 0.0 {
            w / denom
        } else {
            w
        }
    })
}

#[allow(clippy::cast_precision_loss)]
fn centrality(graph: &PairingGraph) -> PairingGraph {
    // Standard normalized degree centrality: degree / (n - 1).
    let n = graph.node_count();
    let scale = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let centrality: HashMap<&str, f64> = graph
        .nodes()
        .map(|v| (v, graph.degree(v) as f64 / scale))
        .collect();

    rewrite(graph, |a, b, w| {
        let ca = centrality.get(a).copied().unwrap_or(0.0);
        let cb = centrality.get(b).copied().unwrap_or(0.0);
        w / (1.0 + ca + cb)
    })
}

#[allow(clippy::cast_precision_loss)]
fn rarity(graph: &PairingGraph) -> PairingGraph {
    let degrees: HashMap<&str, usize> = graph.nodes().map(|v| (v, graph.degree(v))).collect();

    rewrite(graph, |a, b, w| {
        let combined = degrees.get(a).copied().unwrap_or(0) + degrees.get(b).copied().unwrap_or(0);
        if combined > 0 {
            w / combined as f64
        } else {
            w
        }
    })
}

/// Copies the graph, mapping every edge weight through `f`.
fn rewrite(graph: &PairingGraph, f: impl Fn(&str, &str, f64) -> f64) -> PairingGraph {
    let mut out = PairingGraph::new();
    for node in graph.nodes() {
        out.add_node(node);
    }
    for (a, b, w) in graph.edges() {
        out.set_edge(a, b, f(a, b, w));
    }
    out
}
