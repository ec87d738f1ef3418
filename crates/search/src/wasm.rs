//! WASM bindings for catalog search.

use crate::{CatalogEntry, ScoringConfig};
use wasm_bindgen::prelude::*;

/// Score one catalog entry, given as JSON, against a query.
///
/// Returns 0 if the entry JSON is malformed.
#[wasm_bindgen]
pub fn score_entry(entry_json: &str, query: &str) -> u32 {
    serde_json::from_str::<CatalogEntry>(entry_json)
        .map(|entry| crate::score(&entry, query))
        .unwrap_or(0)
}

/// List-widget filter signal (0 or 1).
///
/// # Arguments
/// * `value` - Row text
/// * `search` - Search box contents
/// * `keywords` - Extra terms for the row
#[wasm_bindgen]
pub fn filter_matches(value: &str, search: &str, keywords: Vec<String>) -> u8 {
    crate::filter_matches(value, search, &keywords)
}

/// Bounded edit distance, or -1 when it exceeds `max_distance`.
///
/// A negative `max_distance` is treated as 0.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str, max_distance: i32) -> i32 {
    let max = usize::try_from(max_distance).unwrap_or(0);
    crate::bounded_distance(a, b, max)
        .and_then(|d| i32::try_from(d).ok())
        .unwrap_or(-1)
}

/// Rank a catalog and return sorted results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `catalog_json` - JSON array of catalog entries
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `id` and `score` fields, sorted by score
#[wasm_bindgen]
pub fn search_catalog(query: &str, catalog_json: &str, max_results: usize) -> String {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Hit<'a> {
        id: &'a str,
        score: u32,
    }

    let entries = match crate::parse_catalog(catalog_json) {
        Ok(entries) => entries,
        Err(_) => return "[]".to_string(),
    };

    let limit = (max_results > 0).then_some(max_results);
    let hits: Vec<Hit> = crate::rank_catalog(&entries, query, &ScoringConfig::default(), limit)
        .into_iter()
        .map(|r| Hit {
            id: &r.item.id,
            score: r.score,
        })
        .collect();

    serde_json::to_string(&hits).unwrap_or_else(|_| "[]".to_string())
}
