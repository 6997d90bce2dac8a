// src/ingest/mod.rs
//! Recipe CSV ingestion: column allowlisting and value normalization.
//!
//! The core only cares about the six `ingredient-N` columns of the
//! flattened dataset; everything else (names, measurements, glassware)
//! is ignored. Values are trimmed and lowercased here so the graph can
//! treat ingredient names as exact-match identifiers.

pub mod reader;

use std::fs;
use std::path::Path;

use crate::error::{MixError, Result};

/// Number of ingredient slots per recipe row.
pub const SLOTS: usize = 6;

/// One recipe: up to six optional ingredient slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeRow {
    pub ingredients: [Option<String>; SLOTS],
}

impl RecipeRow {
    /// The populated slots, in order.
    #[must_use]
    pub fn present(&self) -> Vec<&str> {
        self.ingredients.iter().filter_map(|s| s.as_deref()).collect()
    }
}

/// Loads recipe rows from a CSV file, keeping only the `ingredient-1`
/// through `ingredient-6` columns. `limit` caps the number of rows read.
///
/// # Errors
///
/// Returns [`MixError::Io`] if the file cannot be read, and
/// [`MixError::MissingColumn`] when any ingredient column is absent from
/// the header.
pub fn load_recipes(path: &Path, limit: Option<usize>) -> Result<Vec<RecipeRow>> {
    let content = fs::read_to_string(path).map_err(|source| MixError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_recipes(&content, limit)
}

/// Parses CSV text into recipe rows. See [`load_recipes`].
///
/// # Errors
///
/// Returns [`MixError::MissingColumn`] when any ingredient column is
/// absent from the header (or the input is empty).
pub fn parse_recipes(content: &str, limit: Option<usize>) -> Result<Vec<RecipeRow>> {
    let mut records = reader::records(content);

    let Some(raw_header) = records.next() else {
        return Err(MixError::MissingColumn(expected_columns()));
    };
    let header: Vec<String> = raw_header
        .iter()
        .map(|field| field.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut indices = [0usize; SLOTS];
    let mut missing = Vec::new();
    for (slot, index) in indices.iter_mut().enumerate() {
        let name = format!("ingredient-{}", slot + 1);
        match header.iter().position(|h| *h == name) {
            Some(at) => *index = at,
            None => missing.push(name),
        }
    }
    if !missing.is_empty() {
        return Err(MixError::MissingColumn(missing));
    }

    let mut rows = Vec::new();
    for record in records {
        if let Some(cap) = limit {
            if rows.len() >= cap {
                break;
            }
        }
        // Blank lines show up as a single empty field; skip them.
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let mut row = RecipeRow::default();
        for (slot, &at) in indices.iter().enumerate() {
            let value = record.get(at).map(|v| normalize(v)).unwrap_or_default();
            if !value.is_empty() {
                row.ingredients[slot] = Some(value);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Trims surrounding whitespace and lowercases, matching how the cleaned
/// dataset stores ingredient names.
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn expected_columns() -> Vec<String> {
    (1..=SLOTS).map(|i| format!("ingredient-{i}")).collect()
}
