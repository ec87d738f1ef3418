//! Relevance scoring for catalog entries.
//!
//! Exact and substring tiers are additive: an entry that matches on its
//! aliases and its name outranks one that matches on the name alone. When
//! none of them fire, a single fuzzy tier may apply instead.

use crate::config::{FuzzyConfig, ScoringConfig, TierPoints};
use crate::fuzzy::within_distance;
use crate::normalize::{compact_id, normalize, strip_whitespace};
use crate::CatalogEntry;
use serde::{Deserialize, Serialize};

/// A scoring rule that contributes points when its predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Some alias equals the query
    ExactAlias,
    /// Some alias starts with the query
    AliasPrefix,
    /// Some alias contains the query
    AliasSubstring,
    /// Name contains the query
    NameSubstring,
    /// Id, hyphens and underscores removed, contains the query
    IdSubstring,
    /// Every query token appears somewhere in the entry
    AllTokens,
    /// Description contains the query
    DescriptionSubstring,
    /// Category contains the query
    CategorySubstring,
    /// Alias within the near edit distance
    FuzzyAlias,
    /// Name word or id within the near edit distance
    FuzzyNameOrId,
    /// Alias within the wide edit distance
    FuzzyAliasWide,
}

impl Tier {
    /// Points this tier contributes under `points`.
    pub fn points(self, points: &TierPoints) -> u32 {
        match self {
            Tier::ExactAlias => points.exact_alias,
            Tier::AliasPrefix => points.alias_prefix,
            Tier::AliasSubstring => points.alias_substring,
            Tier::NameSubstring => points.name_substring,
            Tier::IdSubstring => points.id_substring,
            Tier::AllTokens => points.all_tokens,
            Tier::DescriptionSubstring => points.description_substring,
            Tier::CategorySubstring => points.category_substring,
            Tier::FuzzyAlias => points.fuzzy_alias,
            Tier::FuzzyNameOrId => points.fuzzy_name_or_id,
            Tier::FuzzyAliasWide => points.fuzzy_alias_wide,
        }
    }

    /// Returns true for the exclusive fallback tiers.
    pub fn is_fuzzy(self) -> bool {
        matches!(self, Tier::FuzzyAlias | Tier::FuzzyNameOrId | Tier::FuzzyAliasWide)
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Tier::ExactAlias => "exact alias",
            Tier::AliasPrefix => "alias prefix",
            Tier::AliasSubstring => "alias substring",
            Tier::NameSubstring => "name substring",
            Tier::IdSubstring => "id substring",
            Tier::AllTokens => "all tokens",
            Tier::DescriptionSubstring => "description substring",
            Tier::CategorySubstring => "category substring",
            Tier::FuzzyAlias => "fuzzy alias",
            Tier::FuzzyNameOrId => "fuzzy name/id",
            Tier::FuzzyAliasWide => "fuzzy alias (wide)",
        }
    }
}

/// A field in the two forms it is compared in.
struct FieldForms {
    lower: String,
    normalized: String,
}

impl FieldForms {
    fn new(text: &str) -> Self {
        Self {
            lower: text.to_lowercase(),
            normalized: normalize(text),
        }
    }
}

/// The raw lowercased query and its normalized form.
struct QueryForms<'a> {
    raw: &'a str,
    normalized: &'a str,
}

impl QueryForms<'_> {
    /// Raw against the lowercased field, normalized against the normalized
    /// field. An empty form never matches.
    fn test(&self, field: &FieldForms, pred: impl Fn(&str, &str) -> bool) -> bool {
        (!self.raw.is_empty() && pred(&field.lower, self.raw))
            || (!self.normalized.is_empty() && pred(&field.normalized, self.normalized))
    }
}

fn equals(field: &str, query: &str) -> bool {
    field == query
}

fn starts_with(field: &str, query: &str) -> bool {
    field.starts_with(query)
}

fn contains(field: &str, query: &str) -> bool {
    field.contains(query)
}

/// Calculate the relevance of an entry for a query using default tiers.
///
/// # Arguments
/// * `entry` - The catalog entry to score
/// * `query` - The raw search query
///
/// # Returns
/// Relevance score; `0` means the entry should be excluded.
///
/// # Example
/// ```
/// use calcfinder_search::{score, CatalogEntry};
///
/// let entry = CatalogEntry::new("ckd-epi-creatinine", "CKD-EPI Creatinine (2021)")
///     .with_search_terms(["egfr", "gfr"]);
/// assert!(score(&entry, "gfr") >= 100);
/// assert_eq!(score(&entry, ""), 0);
/// ```
pub fn score(entry: &CatalogEntry, query: &str) -> u32 {
    score_with(entry, query, &ScoringConfig::default())
}

/// Calculate the relevance of an entry for a query under `config`.
pub fn score_with(entry: &CatalogEntry, query: &str, config: &ScoringConfig) -> u32 {
    matched_tiers(entry, query, &config.fuzzy)
        .into_iter()
        .map(|tier| tier.points(&config.tiers))
        .fold(0u32, u32::saturating_add)
}

/// List the tiers an entry satisfies for a query.
///
/// Returns the additive tiers that fired, in table order, or at most one
/// fuzzy tier when none did. Empty for an empty query or no match.
pub fn matched_tiers(entry: &CatalogEntry, query: &str, fuzzy: &FuzzyConfig) -> Vec<Tier> {
    let raw = query.trim().to_lowercase();
    if raw.is_empty() {
        return Vec::new();
    }
    let normalized = normalize(&raw);
    let q = QueryForms {
        raw: &raw,
        normalized: &normalized,
    };

    let aliases: Vec<FieldForms> = entry.search_terms.iter().map(|t| FieldForms::new(t)).collect();
    let name = FieldForms::new(&entry.name);
    let description = FieldForms::new(&entry.description);
    let category = FieldForms::new(&entry.category);
    let id_normalized = normalize(&entry.id);

    let mut tiers = Vec::new();

    if aliases.iter().any(|a| q.test(a, equals)) {
        tiers.push(Tier::ExactAlias);
    }
    if aliases.iter().any(|a| q.test(a, starts_with)) {
        tiers.push(Tier::AliasPrefix);
    }
    if aliases.iter().any(|a| q.test(a, contains)) {
        tiers.push(Tier::AliasSubstring);
    }
    if q.test(&name, contains) {
        tiers.push(Tier::NameSubstring);
    }

    let id = compact_id(&entry.id);
    if [strip_whitespace(q.raw), strip_whitespace(q.normalized)]
        .iter()
        .any(|needle| !needle.is_empty() && id.contains(needle.as_str()))
    {
        tiers.push(Tier::IdSubstring);
    }

    let mut haystack = vec![
        name.normalized.as_str(),
        description.normalized.as_str(),
        category.normalized.as_str(),
    ];
    haystack.extend(aliases.iter().map(|a| a.normalized.as_str()));
    haystack.push(id_normalized.as_str());
    if all_tokens_present(&normalized, &haystack.join(" ")) {
        tiers.push(Tier::AllTokens);
    }

    if q.test(&description, contains) {
        tiers.push(Tier::DescriptionSubstring);
    }
    if q.test(&category, contains) {
        tiers.push(Tier::CategorySubstring);
    }

    if tiers.is_empty() {
        tiers.extend(fuzzy_tier(&normalized, &aliases, &name, &id_normalized, fuzzy));
    }

    tiers
}

/// Every whitespace token of `normalized_query` is a substring of
/// `haystack`. False for a query with no tokens.
pub(crate) fn all_tokens_present(normalized_query: &str, haystack: &str) -> bool {
    let mut tokens = normalized_query.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|token| haystack.contains(token))
}

/// The first fuzzy fallback tier that fires, if any.
fn fuzzy_tier(
    normalized: &str,
    aliases: &[FieldForms],
    name: &FieldForms,
    id_normalized: &str,
    fuzzy: &FuzzyConfig,
) -> Option<Tier> {
    let len = normalized.chars().count();
    if len < fuzzy.min_query_len {
        return None;
    }

    let near = fuzzy.near_distance;
    if aliases
        .iter()
        .any(|a| within_distance(&a.normalized, normalized, near))
    {
        return Some(Tier::FuzzyAlias);
    }

    if name
        .normalized
        .split_whitespace()
        .any(|word| within_distance(word, normalized, near))
        || within_distance(id_normalized, normalized, near)
    {
        return Some(Tier::FuzzyNameOrId);
    }

    if len >= fuzzy.wide_min_query_len
        && aliases
            .iter()
            .any(|a| within_distance(&a.normalized, normalized, fuzzy.wide_distance))
    {
        return Some(Tier::FuzzyAliasWide);
    }

    None
}
