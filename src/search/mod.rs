// src/search/mod.rs
//! Randomized constrained subgraph search over the pairing graph.
//!
//! The searcher only reads edge weights and neighbor lists; the graph is
//! never mutated. Parallel searches from different start ingredients may
//! share one graph as long as each carries its own frontier state.

pub mod frontier;

use std::collections::HashSet;

use rand::Rng;

use crate::error::{MixError, Result};
use crate::graph::PairingGraph;
pub use frontier::Frontier;

/// Tunables for the gated probabilistic search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Upper bound on the number of ingredients in the result.
    pub max_nodes: usize,
    /// Slack for the connectivity gate: an accepted candidate may lack a
    /// link to at most this many already-chosen nodes.
    pub min_connections: usize,
    /// Edges below this weight do not count as connections.
    pub min_weight: f64,
    /// Number of top frontier entries entering the probabilistic pick.
    /// `1` degenerates to pure greedy.
    pub k: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_nodes: 5,
            min_connections: 2,
            min_weight: 0.02,
            k: 5,
        }
    }
}

/// A generated recipe: the chosen ingredients (in acceptance order) and
/// the accumulated weight of their qualifying edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub ingredients: Vec<String>,
    pub total_weight: f64,
}

/// Expands a connected ingredient set from `start`.
///
/// Each round draws a candidate from the top-`k` frontier entries with
/// probability proportional to edge weight, then admits it only if it is
/// connected, by edges of at least `min_weight`, to all but
/// `min_connections` of the nodes already chosen. A rejected candidate
/// is discarded for good. The search stops once `max_nodes` ingredients
/// are chosen or the frontier runs dry; a short result is not an error.
///
/// The caller supplies the random source, so a fixed seed reproduces the
/// same recipe.
///
/// # Errors
///
/// Returns [`MixError::InvalidStart`] if `start` is not in the graph.
pub fn search<R: Rng>(
    graph: &PairingGraph,
    start: &str,
    params: &SearchParams,
    rng: &mut R,
) -> Result<Recipe> {
    if !graph.contains(start) {
        return Err(MixError::InvalidStart(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut total_weight = 0.0;
    let mut frontier = Frontier::new();
    frontier.push(0.0, start.to_string());

    while visited.len() < params.max_nodes {
        let Some(candidate) = frontier.select(params.k, rng) else {
            break;
        };
        frontier.remove_all(&candidate);

        // Connectivity gate: qualifying links into the chosen set.
        let connections: Vec<f64> = visited
            .iter()
            .filter_map(|v| graph.edge_weight(&candidate, v))
            .filter(|&w| w >= params.min_weight)
            .collect();
        let required = visited.len().saturating_sub(params.min_connections);
        if connections.len() < required {
            continue;
        }

        visited.insert(candidate.clone());
        order.push(candidate.clone());
        total_weight += connections.iter().sum::<f64>();

        // Duplicate frontier entries for a node already discovered via
        // another edge are intended; they bias the draw toward it.
        for (neighbor, weight) in graph.neighbors(&candidate) {
            if !visited.contains(neighbor) {
                frontier.push(weight, neighbor.to_string());
            }
        }
    }

    Ok(Recipe {
        ingredients: order,
        total_weight,
    })
}

/// The earlier deterministic variant: always expand the single
/// best-weight frontier entry and accept it unconditionally. No gate, no
/// randomness; the accepting entry's own weight is what accumulates.
///
/// # Errors
///
/// Returns [`MixError::InvalidStart`] if `start` is not in the graph.
pub fn search_greedy(graph: &PairingGraph, start: &str, max_nodes: usize) -> Result<Recipe> {
    if !graph.contains(start) {
        return Err(MixError::InvalidStart(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut total_weight = 0.0;
    let mut frontier = Frontier::new();
    frontier.push(0.0, start.to_string());

    while visited.len() < max_nodes {
        let Some((weight, current)) = frontier.pop_best() else {
            break;
        };
        if visited.contains(&current) {
            continue;
        }

        visited.insert(current.clone());
        order.push(current.clone());
        total_weight += weight;

        for (neighbor, w) in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                frontier.push(w, neighbor.to_string());
            }
        }
    }

    Ok(Recipe {
        ingredients: order,
        total_weight,
    })
}
