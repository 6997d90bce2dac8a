// src/bin/mixgraph.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mixgraph_core::cli::{handlers, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate(args) => handlers::handle_generate(args),
        Commands::Export(args) => handlers::handle_export(args),
        Commands::Stats(args) => handlers::handle_stats(args),
    }
}
