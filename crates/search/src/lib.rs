//! Fuzzy search and relevance ranking for the calculator catalog.
//!
//! This crate provides:
//! - Text normalization
//! - Bounded restricted Damerau–Levenshtein distance with early exit
//! - Tiered, additive relevance scoring with a fuzzy fallback
//! - A 0/1 filter signal for list widgets
//! - Whole-catalog ranking with optional parallelism
//!
//! Every scoring and filtering function is pure: the same entry and query
//! always give the same answer, and nothing is cached or mutated.
//!
//! # Example
//!
//! ```
//! use calcfinder_search::{rank_catalog, CatalogEntry, ScoringConfig};
//!
//! let entries = vec![
//!     CatalogEntry::new("ckd-epi-creatinine", "CKD-EPI Creatinine (2021)")
//!         .with_search_terms(["egfr", "gfr"]),
//!     CatalogEntry::new("kdpi", "Kidney Donor Profile Index"),
//! ];
//!
//! let results = rank_catalog(&entries, "kdip", &ScoringConfig::default(), None);
//! assert_eq!(results[0].item.id, "kdpi");
//! ```

mod catalog;
pub mod config;
mod error;
mod filter;
mod fuzzy;
mod normalize;
mod rank;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{parse_catalog, CatalogEntry};
pub use config::{FuzzyConfig, ScoringConfig, TierPoints};
pub use error::{Result, SearchError, SearchErrorCode};
pub use filter::{filter_matches, matches_filter, MATCH, NO_MATCH};
pub use fuzzy::{bounded_distance, within_distance};
pub use normalize::{is_stripped, normalize};
pub use rank::{filter_catalog, rank_catalog};
pub use relevance::{matched_tiers, score, score_with, Tier};

/// Search result with relevance score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}
