//! Whole-catalog ranking and filtering with optional parallelism.
//!
//! These are the two call patterns the UI uses on every keystroke: a
//! ranked list for the sidebar and an order-preserving filter for the
//! command palette.

use crate::{matches_filter, score_with, CatalogEntry, ScoringConfig, SearchResult};

/// Score every entry, drop non-matches and sort by descending score.
///
/// Ties keep catalog order.
///
/// # Arguments
/// * `entries` - Catalog snapshot
/// * `query` - Raw search query
/// * `config` - Tier points and fuzzy thresholds
/// * `max_results` - Maximum number of results to return (None for all)
///
/// # Example
/// ```
/// use calcfinder_search::{rank_catalog, CatalogEntry, ScoringConfig};
///
/// let entries = vec![
///     CatalogEntry::new("qsofa", "qSOFA Score"),
///     CatalogEntry::new("sofa", "SOFA Score").with_search_terms(["sofa"]),
///     CatalogEntry::new("meld", "MELD Score"),
/// ];
///
/// let results = rank_catalog(&entries, "sofa", &ScoringConfig::default(), None);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].item.id, "sofa");
/// ```
pub fn rank_catalog<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    config: &ScoringConfig,
    max_results: Option<usize>,
) -> Vec<SearchResult<&'a CatalogEntry>> {
    let scores = score_all(entries, query, config);

    let mut results: Vec<SearchResult<&CatalogEntry>> = entries
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score > 0)
        .map(|(item, score)| SearchResult { item, score })
        .collect();

    // Stable sort, so equal scores stay in catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(max) = max_results {
        results.truncate(max);
    }

    tracing::debug!(
        query,
        candidates = entries.len(),
        matched = results.len(),
        "Ranked catalog"
    );

    results
}

/// Keep the entries a list widget would show for `search`, in catalog order.
///
/// Each entry is matched on its name, with its aliases and id as keywords.
pub fn filter_catalog<'a>(entries: &'a [CatalogEntry], search: &str) -> Vec<&'a CatalogEntry> {
    let filtered: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| {
            let mut keywords: Vec<&str> = entry.search_terms.iter().map(String::as_str).collect();
            keywords.push(&entry.id);
            matches_filter(&entry.name, search, &keywords)
        })
        .collect();

    tracing::debug!(
        search,
        candidates = entries.len(),
        matched = filtered.len(),
        "Filtered catalog"
    );

    filtered
}

fn score_all(entries: &[CatalogEntry], query: &str, config: &ScoringConfig) -> Vec<u32> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        entries
            .par_iter()
            .map(|entry| score_with(entry, query, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        entries
            .iter()
            .map(|entry| score_with(entry, query, config))
            .collect()
    }
}
