// src/config.rs
//! Local configuration: search defaults overridable by `mixgraph.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::graph::normalize::Strategy;

/// Default search parameters, optionally overlaid from `mixgraph.toml`
/// in the working directory. CLI flags take precedence over both.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_nodes: usize,
    pub min_connections: usize,
    pub min_weight: f64,
    pub k: usize,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nodes: 5,
            min_connections: 2,
            min_weight: 0.02,
            k: 5,
            strategy: Strategy::RelativeDegree,
        }
    }
}

impl Config {
    /// Loads `mixgraph.toml` from the working directory when present.
    /// A missing or malformed file falls back to defaults; the CLI flags
    /// remain the authority either way.
    #[must_use]
    pub fn load_local() -> Self {
        Self::load_from(Path::new("mixgraph.toml"))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }
}
