// tests/unit_search.rs
//! Tests for the gated probabilistic search and the deterministic
//! greedy variant.

use mixgraph_core::error::MixError;
use mixgraph_core::graph::PairingGraph;
use mixgraph_core::search::{self, Frontier, SearchParams};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// The reference scenario: vodka-lime 0.4, vodka-soda 0.3, lime-mint
/// 0.2, vodka-mint 0.1, sugar unconnected.
fn cocktail_graph() -> PairingGraph {
    let mut g = PairingGraph::new();
    g.set_edge("vodka", "lime", 0.4);
    g.set_edge("vodka", "soda", 0.3);
    g.set_edge("lime", "mint", 0.2);
    g.set_edge("vodka", "mint", 0.1);
    g.add_node("sugar");
    g
}

fn params(max_nodes: usize, min_connections: usize, min_weight: f64, k: usize) -> SearchParams {
    SearchParams {
        max_nodes,
        min_connections,
        min_weight,
        k,
    }
}

#[test]
fn test_reference_scenario_greedy_pick() {
    // vodka first (seed entry), then lime (0.4 beats everything, gate
    // trivially satisfied), then soda (0.3 beats both mint entries; one
    // connection >= max(2-2, 0) clears the gate).
    let g = cocktail_graph();
    let mut rng = SmallRng::seed_from_u64(7);
    let recipe = search::search(&g, "vodka", &params(3, 2, 0.05, 1), &mut rng).unwrap();

    assert_eq!(recipe.ingredients, vec!["vodka", "lime", "soda"]);
    assert!(approx(recipe.total_weight, 0.7), "got {}", recipe.total_weight);
}

#[test]
fn test_k1_is_deterministic() {
    let g = cocktail_graph();
    let p = params(4, 2, 0.05, 1);

    let mut rng_a = SmallRng::seed_from_u64(1);
    let mut rng_b = SmallRng::seed_from_u64(987_654_321);
    let a = search::search(&g, "vodka", &p, &mut rng_a).unwrap();
    let b = search::search(&g, "vodka", &p, &mut rng_b).unwrap();

    assert_eq!(a, b, "k=1 must ignore the random source");
}

#[test]
fn test_same_seed_reproduces_probabilistic_runs() {
    let g = cocktail_graph();
    let p = params(4, 2, 0.05, 3);

    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut rng_b = SmallRng::seed_from_u64(42);
    let a = search::search(&g, "vodka", &p, &mut rng_a).unwrap();
    let b = search::search(&g, "vodka", &p, &mut rng_b).unwrap();

    assert_eq!(a, b, "identical seeds must yield identical recipes");
}

#[test]
fn test_invalid_start() {
    let g = cocktail_graph();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = search::search(&g, "absinthe", &params(3, 2, 0.05, 1), &mut rng).unwrap_err();
    assert!(matches!(err, MixError::InvalidStart(name) if name == "absinthe"));
}

#[test]
fn test_never_exceeds_max_nodes() {
    // Complete graph over five nodes, everything connected.
    let names = ["a", "b", "c", "d", "e"];
    let mut g = PairingGraph::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            g.set_edge(names[i], names[j], 1.0);
        }
    }

    let mut rng = SmallRng::seed_from_u64(5);
    let recipe = search::search(&g, "a", &params(3, 5, 0.0, 2), &mut rng).unwrap();
    assert_eq!(recipe.ingredients.len(), 3);
}

#[test]
fn test_exhausted_frontier_returns_short_result() {
    let mut g = PairingGraph::new();
    g.set_edge("gin", "tonic", 1.0);

    let mut rng = SmallRng::seed_from_u64(3);
    let recipe = search::search(&g, "gin", &params(10, 2, 0.0, 1), &mut rng).unwrap();
    assert_eq!(recipe.ingredients.len(), 2, "short result is valid");
}

#[test]
fn test_connectivity_gate_rejects() {
    // c links only to a; once {a, b} are chosen, min_connections = 0
    // demands two qualifying links, so c is rejected and discarded.
    let mut g = PairingGraph::new();
    g.set_edge("a", "b", 1.0);
    g.set_edge("a", "c", 0.9);

    let mut rng = SmallRng::seed_from_u64(11);
    let recipe = search::search(&g, "a", &params(5, 0, 0.5, 1), &mut rng).unwrap();

    assert_eq!(recipe.ingredients, vec!["a", "b"]);
    assert!(approx(recipe.total_weight, 1.0));
}

#[test]
fn test_min_weight_excludes_weak_edges_from_total() {
    // b-c exists but is below min_weight: it neither counts as a
    // connection nor contributes to the accumulated weight.
    let mut g = PairingGraph::new();
    g.set_edge("a", "b", 1.0);
    g.set_edge("a", "c", 0.9);
    g.set_edge("b", "c", 0.01);

    let mut rng = SmallRng::seed_from_u64(2);
    let recipe = search::search(&g, "a", &params(3, 2, 0.05, 1), &mut rng).unwrap();

    assert_eq!(recipe.ingredients, vec!["a", "b", "c"]);
    assert!(approx(recipe.total_weight, 1.9), "got {}", recipe.total_weight);
}

#[test]
fn test_isolated_start_yields_only_itself() {
    let g = cocktail_graph();
    let mut rng = SmallRng::seed_from_u64(4);
    let recipe = search::search(&g, "sugar", &params(5, 2, 0.05, 1), &mut rng).unwrap();
    assert_eq!(recipe.ingredients, vec!["sugar"]);
    assert!(approx(recipe.total_weight, 0.0));
}

#[test]
fn test_max_nodes_zero() {
    let g = cocktail_graph();
    let mut rng = SmallRng::seed_from_u64(4);
    let recipe = search::search(&g, "vodka", &params(0, 2, 0.05, 1), &mut rng).unwrap();
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_greedy_variant_reference_scenario() {
    // Accepts unconditionally and accumulates the accepting entry's
    // weight: vodka(0) -> lime(0.4) -> soda(0.3).
    let g = cocktail_graph();
    let recipe = search::search_greedy(&g, "vodka", 3).unwrap();

    assert_eq!(recipe.ingredients, vec!["vodka", "lime", "soda"]);
    assert!(approx(recipe.total_weight, 0.7));
}

#[test]
fn test_greedy_invalid_start() {
    let g = cocktail_graph();
    let err = search::search_greedy(&g, "mezcal", 3).unwrap_err();
    assert!(matches!(err, MixError::InvalidStart(_)));
}

#[test]
fn test_frontier_orders_and_breaks_ties_stably() {
    let mut f = Frontier::new();
    f.push(0.4, "second".to_string());
    f.push(0.4, "third".to_string());
    f.push(0.5, "first".to_string());

    assert_eq!(f.pop_best().unwrap().1, "first");
    assert_eq!(f.pop_best().unwrap().1, "second", "ties keep insertion order");
    assert_eq!(f.pop_best().unwrap().1, "third");
    assert!(f.is_empty());
}

#[test]
fn test_frontier_select_k1_takes_best() {
    let mut f = Frontier::new();
    f.push(0.1, "weak".to_string());
    f.push(0.9, "strong".to_string());

    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..10 {
        assert_eq!(f.select(1, &mut rng).as_deref(), Some("strong"));
    }
}

#[test]
fn test_frontier_keeps_duplicates_and_removes_them_together() {
    let mut f = Frontier::new();
    f.push(0.3, "mint".to_string());
    f.push(0.1, "mint".to_string());
    f.push(0.2, "soda".to_string());
    assert_eq!(f.len(), 3, "duplicates are kept");

    f.remove_all("mint");
    assert_eq!(f.len(), 1);
    assert_eq!(f.pop_best().unwrap().1, "soda");
}

#[test]
fn test_frontier_single_zero_weight_entry() {
    // The seed entry carries weight 0 and must still be selectable.
    let mut f = Frontier::new();
    f.push(0.0, "start".to_string());

    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(f.select(5, &mut rng).as_deref(), Some("start"));
}
