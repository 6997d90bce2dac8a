pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod ingest;
pub mod search;
