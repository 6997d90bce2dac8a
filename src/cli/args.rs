use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::graph::normalize::Strategy;

#[derive(Parser)]
#[command(name = "mixgraph", version, about = "Recipe generation from ingredient pairings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a recipe by searching the pairing graph
    Generate(GenerateArgs),
    /// Dump the pairing graph as JSON for rendering
    Export(ExportArgs),
    /// Show dataset and graph statistics
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Recipe dataset (cleaned CSV)
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
    /// Starting ingredient
    #[arg(long, short)]
    pub start: String,
    /// Maximum number of ingredients
    #[arg(long)]
    pub max_nodes: Option<usize>,
    /// Connectivity slack: an accepted ingredient may miss at most this
    /// many links into the chosen set
    #[arg(long)]
    pub min_connections: Option<usize>,
    /// Minimum edge weight counted as a connection
    #[arg(long)]
    pub min_weight: Option<f64>,
    /// Candidates considered by the probabilistic pick (1 = greedy)
    #[arg(long, short)]
    pub k: Option<usize>,
    /// Weight normalization strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,
    /// RNG seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
    /// Use the unconstrained deterministic expansion instead
    #[arg(long)]
    pub greedy: bool,
    /// Only read the first N recipes
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
    /// Write the generated recipe's induced subgraph as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Recipe dataset (cleaned CSV)
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
    /// Output path (stdout when omitted)
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Weight normalization strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,
    /// Keep raw co-occurrence counts instead of normalizing
    #[arg(long)]
    pub raw: bool,
    /// Only read the first N recipes
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Recipe dataset (cleaned CSV)
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
    /// Number of hub ingredients to list
    #[arg(long, default_value = "10")]
    pub top: usize,
    /// Only read the first N recipes
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}
