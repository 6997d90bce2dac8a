// src/graph/mod.rs
//! The ingredient pairing graph: co-occurrence structure and queries.

pub mod builder;
pub mod normalize;

use std::collections::{HashMap, HashSet};

/// Undirected weighted graph over ingredient names.
///
/// Adjacency is stored symmetrically: an edge (a, b) appears under both
/// endpoints with the same weight. At most one edge exists per unordered
/// pair, and self-loops are never created. Weights start as raw
/// co-occurrence counts and become (0, 1]-ish scores after normalization.
#[derive(Debug, Clone, Default)]
pub struct PairingGraph {
    adjacency: HashMap<String, HashMap<String, f64>>,
}

impl PairingGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Inserts a node with no edges. No-op if the node already exists.
    pub fn add_node(&mut self, name: &str) {
        self.adjacency.entry(name.to_string()).or_default();
    }

    /// Adds `delta` to the weight of edge (a, b), creating the edge and
    /// its endpoints if absent. Self-pairs are ignored.
    pub fn accumulate_edge(&mut self, a: &str, b: &str, delta: f64) {
        if a == b {
            return;
        }
        *self
            .adjacency
            .entry(a.to_string())
            .or_default()
            .entry(b.to_string())
            .or_insert(0.0) += delta;
        *self
            .adjacency
            .entry(b.to_string())
            .or_default()
            .entry(a.to_string())
            .or_insert(0.0) += delta;
    }

    /// Sets the weight of edge (a, b), creating it if absent. Self-pairs
    /// are ignored.
    pub fn set_edge(&mut self, a: &str, b: &str, weight: f64) {
        if a == b {
            return;
        }
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|nbrs| nbrs.get(b)).copied()
    }

    /// Neighbors of a node with their edge weights. Empty for unknown nodes.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|nbrs| nbrs.iter().map(|(n, &w)| (n.as_str(), w)))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Number of edges incident to a node. Zero for unknown nodes.
    #[must_use]
    pub fn degree(&self, name: &str) -> usize {
        self.adjacency.get(name).map_or(0, HashMap::len)
    }

    /// Sum of the weights of all edges incident to a node.
    #[must_use]
    pub fn incident_weight(&self, name: &str) -> f64 {
        self.adjacency
            .get(name)
            .map_or(0.0, |nbrs| nbrs.values().sum())
    }

    /// Every edge exactly once, as (a, b, weight) with a < b.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.adjacency.iter().flat_map(|(a, nbrs)| {
            let a = a.as_str();
            nbrs.iter()
                .filter(move |(b, _)| a < b.as_str())
                .map(move |(b, &w)| (a, b.as_str(), w))
        })
    }

    /// Node-induced subgraph: the given nodes plus only the edges whose
    /// endpoints both belong to the set. Unknown names are skipped.
    #[must_use]
    pub fn subgraph(&self, keep: &[String]) -> Self {
        let wanted: HashSet<&str> = keep.iter().map(String::as_str).collect();
        let mut out = Self::new();
        for &node in &wanted {
            if self.contains(node) {
                out.add_node(node);
            }
        }
        for (a, b, w) in self.edges() {
            if wanted.contains(a) && wanted.contains(b) {
                out.set_edge(a, b, w);
            }
        }
        out
    }
}
