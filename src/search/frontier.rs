// src/search/frontier.rs
//! The candidate frontier: a weight-ordered working set of discovered
//! but not-yet-visited nodes.

use rand::Rng;

/// Pending `(weight, node)` entries kept sorted by weight descending.
///
/// A node appears once per accepting edge; duplicates are kept on
/// purpose so ingredients reachable through several strong pairings are
/// more likely to be drawn. Equal weights keep insertion order.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: Vec<(f64, String)>,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry, keeping the descending order. Ties land after
    /// existing entries of the same weight.
    pub fn push(&mut self, weight: f64, node: String) {
        let at = self.entries.partition_point(|(w, _)| *w >= weight);
        self.entries.insert(at, (weight, node));
    }

    /// Draws a candidate: the single remaining entry when only one is
    /// left, otherwise a weight-proportional pick among the top `k`
    /// entries. `k = 1` always takes the best entry.
    pub fn select<R: Rng>(&self, k: usize, rng: &mut R) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        if self.entries.len() == 1 {
            return Some(self.entries[0].1.clone());
        }

        let k = k.clamp(1, self.entries.len());
        let top = &self.entries[..k];
        let total: f64 = top.iter().map(|(w, _)| *w).sum();
        if total <= 0.0 {
            // Degenerate slice of zero-weight entries; take the best.
            return Some(top[0].1.clone());
        }

        let mut draw = rng.gen::<f64>() * total;
        for (w, node) in top {
            draw -= w;
            if draw <= 0.0 {
                return Some(node.clone());
            }
        }
        Some(top[k - 1].1.clone())
    }

    /// Removes every entry for `node`, however many accepting edges put
    /// it here.
    pub fn remove_all(&mut self, node: &str) {
        self.entries.retain(|(_, n)| n != node);
    }

    /// Removes and returns the single highest-weight entry.
    pub fn pop_best(&mut self) -> Option<(f64, String)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }
}
