// src/cli/handlers.rs
//! Command handlers: the ingest → build → normalize → search pipeline.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::cli::args::{ExportArgs, GenerateArgs, StatsArgs};
use crate::config::Config;
use crate::export::GraphDump;
use crate::graph::{builder, PairingGraph};
use crate::ingest;
use crate::search::{self, SearchParams};

pub fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let config = Config::load_local();
    let graph = load_graph(&args.input, args.limit, |raw| {
        args.strategy.unwrap_or(config.strategy).apply(raw)
    })?;

    let recipe = if args.greedy {
        search::search_greedy(&graph, &args.start, args.max_nodes.unwrap_or(config.max_nodes))?
    } else {
        let params = SearchParams {
            max_nodes: args.max_nodes.unwrap_or(config.max_nodes),
            min_connections: args.min_connections.unwrap_or(config.min_connections),
            min_weight: args.min_weight.unwrap_or(config.min_weight),
            k: args.k.unwrap_or(config.k),
        };
        let mut rng = match args.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        search::search(&graph, &args.start, &params, &mut rng)?
    };

    println!(
        "{} {}",
        "recipe:".green().bold(),
        recipe.ingredients.join(", ")
    );
    println!("{} {:.4}", "total weight:".green(), recipe.total_weight);

    if let Some(path) = &args.export {
        let sub = graph.subgraph(&recipe.ingredients);
        let json = GraphDump::from_graph(&sub).to_json()?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("{} {}", "exported".cyan(), path.display());
    }
    Ok(())
}

pub fn handle_export(args: &ExportArgs) -> Result<()> {
    let config = Config::load_local();
    let graph = load_graph(&args.input, args.limit, |raw| {
        if args.raw {
            raw.clone()
        } else {
            args.strategy.unwrap_or(config.strategy).apply(raw)
        }
    })?;

    let json = GraphDump::from_graph(&graph).to_json()?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("{} {}", "exported".cyan(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn handle_stats(args: &StatsArgs) -> Result<()> {
    let rows = ingest::load_recipes(&args.input, args.limit)?;
    let graph = builder::build(&rows);

    println!(
        "{} {} recipes, {} ingredients, {} pairings",
        "dataset:".cyan().bold(),
        rows.len(),
        graph.node_count(),
        graph.edge_count()
    );

    let mut hubs: Vec<(&str, usize, f64)> = graph
        .nodes()
        .map(|n| (n, graph.degree(n), graph.incident_weight(n)))
        .collect();
    hubs.sort_by(|x, y| y.1.cmp(&x.1).then_with(|| x.0.cmp(y.0)));

    println!("{}", "top hubs:".cyan().bold());
    for (name, degree, weight) in hubs.iter().take(args.top) {
        println!("  {name:<24} degree {degree:>4}   incident weight {weight:>8.1}");
    }
    Ok(())
}

fn load_graph(
    input: &std::path::Path,
    limit: Option<usize>,
    finish: impl Fn(&PairingGraph) -> PairingGraph,
) -> Result<PairingGraph> {
    let rows = ingest::load_recipes(input, limit)?;
    let raw = builder::build(&rows);
    // Status goes to stderr so `export` can pipe JSON from stdout.
    eprintln!(
        "{} {} recipes, {} ingredients, {} pairings",
        "loaded".cyan(),
        rows.len(),
        raw.node_count(),
        raw.edge_count()
    );
    Ok(finish(&raw))
}
