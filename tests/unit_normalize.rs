// tests/unit_normalize.rs
//! Tests for the three weight normalization strategies.

use mixgraph_core::export::GraphDump;
use mixgraph_core::graph::normalize::Strategy;
use mixgraph_core::graph::PairingGraph;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Triangle with one doubled edge: a-b=2, a-c=1, b-c=1.
fn triangle() -> PairingGraph {
    let mut g = PairingGraph::new();
    g.set_edge("a", "b", 2.0);
    g.set_edge("a", "c", 1.0);
    g.set_edge("b", "c", 1.0);
    g
}

#[test]
fn test_relative_degree_values() {
    // Totals snapshotted before rewriting: a=3, b=3, c=2.
    let out = Strategy::RelativeDegree.apply(&triangle());

    let ab = out.edge_weight("a", "b").unwrap();
    let ac = out.edge_weight("a", "c").unwrap();
    let bc = out.edge_weight("b", "c").unwrap();
    assert!(approx(ab, 2.0 / 6.0), "ab = {ab}");
    assert!(approx(ac, 1.0 / 5.0), "ac = {ac}");
    assert!(approx(bc, 1.0 / 5.0), "bc = {bc}");
}

#[test]
fn test_relative_degree_never_increases_and_stays_positive() {
    let input = triangle();
    let out = Strategy::RelativeDegree.apply(&input);

    for (a, b, w) in input.edges() {
        let new = out.edge_weight(a, b).unwrap();
        assert!(new <= w, "{a}-{b} grew from {w} to {new}");
        assert!(new > 0.0, "{a}-{b} hit zero");
    }
}

#[test]
fn test_relative_degree_is_deterministic() {
    // Snapshotted denominators make the pass independent of edge
    // iteration order; two applications must agree exactly.
    let input = triangle();
    let first = GraphDump::from_graph(&Strategy::RelativeDegree.apply(&input));
    let second = GraphDump::from_graph(&Strategy::RelativeDegree.apply(&input));
    assert_eq!(first, second);
}

#[test]
fn test_centrality_values() {
    // Path a-b-c: n=3, centrality a=0.5, b=1.0, c=0.5.
    let mut g = PairingGraph::new();
    g.set_edge("a", "b", 1.0);
    g.set_edge("b", "c", 1.0);

    let out = Strategy::Centrality.apply(&g);
    let ab = out.edge_weight("a", "b").unwrap();
    let bc = out.edge_weight("b", "c").unwrap();
    assert!(approx(ab, 1.0 / 2.5), "ab = {ab}");
    assert!(approx(bc, 1.0 / 2.5), "bc = {bc}");
}

#[test]
fn test_rarity_values() {
    // Path a-b-c: degrees a=1, b=2, c=1.
    let mut g = PairingGraph::new();
    g.set_edge("a", "b", 1.0);
    g.set_edge("b", "c", 1.0);

    let out = Strategy::Rarity.apply(&g);
    let ab = out.edge_weight("a", "b").unwrap();
    assert!(approx(ab, 1.0 / 3.0), "ab = {ab}");
}

#[test]
fn test_topology_preserved_and_input_untouched() {
    let input = triangle();
    let before = GraphDump::from_graph(&input);

    for strategy in [Strategy::RelativeDegree, Strategy::Centrality, Strategy::Rarity] {
        let out = strategy.apply(&input);
        assert_eq!(out.node_count(), input.node_count());
        assert_eq!(out.edge_count(), input.edge_count());
    }
    assert_eq!(
        GraphDump::from_graph(&input),
        before,
        "normalization must not mutate its input"
    );
}

#[test]
fn test_isolated_node_survives() {
    let mut g = triangle();
    g.add_node("sugar");

    let out = Strategy::RelativeDegree.apply(&g);
    assert!(out.contains("sugar"));
    assert_eq!(out.degree("sugar"), 0);
}
