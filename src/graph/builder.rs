// src/graph/builder.rs
//! Graph construction: pairwise co-occurrence counting over recipe rows.

use super::PairingGraph;
use crate::ingest::RecipeRow;

/// Builds the co-occurrence graph from recipe rows.
///
/// Every unordered pair of distinct ingredients within one recipe adds 1
/// to that pair's edge weight. Rows with fewer than two ingredients
/// contribute nothing. Accumulation is commutative, so the order of the
/// rows never affects the result.
#[must_use]
pub fn build(rows: &[RecipeRow]) -> PairingGraph {
    let mut graph = PairingGraph::new();
    for row in rows {
        let ingredients = row.present();
        for i in 0..ingredients.len() {
            for j in (i + 1)..ingredients.len() {
                graph.accumulate_edge(ingredients[i], ingredients[j], 1.0);
            }
        }
    }
    graph
}
