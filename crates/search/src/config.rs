//! Scoring configuration.
//!
//! Tier point values are policy, not law. They may be renumbered from
//! TOML, but [`ScoringConfig::validate`] keeps the relative ordering that
//! downstream sorting relies on.

use crate::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoringConfig {
    #[serde(default)]
    pub tiers: TierPoints,

    #[serde(default)]
    pub fuzzy: FuzzyConfig,
}

/// Points awarded per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPoints {
    /// Some alias equals the query
    #[serde(default = "default_exact_alias")]
    pub exact_alias: u32,

    /// Some alias starts with the query
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: u32,

    /// Some alias contains the query
    #[serde(default = "default_alias_substring")]
    pub alias_substring: u32,

    /// Name contains the query
    #[serde(default = "default_name_substring")]
    pub name_substring: u32,

    /// Compacted id contains the query
    #[serde(default = "default_id_substring")]
    pub id_substring: u32,

    /// Every query token appears somewhere in the entry
    #[serde(default = "default_all_tokens")]
    pub all_tokens: u32,

    /// Description contains the query
    #[serde(default = "default_description_substring")]
    pub description_substring: u32,

    /// Category contains the query
    #[serde(default = "default_category_substring")]
    pub category_substring: u32,

    /// Alias within the near edit distance
    #[serde(default = "default_fuzzy_alias")]
    pub fuzzy_alias: u32,

    /// Name word or id within the near edit distance
    #[serde(default = "default_fuzzy_name_or_id")]
    pub fuzzy_name_or_id: u32,

    /// Alias within the wide edit distance
    #[serde(default = "default_fuzzy_alias_wide")]
    pub fuzzy_alias_wide: u32,
}

impl Default for TierPoints {
    fn default() -> Self {
        Self {
            exact_alias: default_exact_alias(),
            alias_prefix: default_alias_prefix(),
            alias_substring: default_alias_substring(),
            name_substring: default_name_substring(),
            id_substring: default_id_substring(),
            all_tokens: default_all_tokens(),
            description_substring: default_description_substring(),
            category_substring: default_category_substring(),
            fuzzy_alias: default_fuzzy_alias(),
            fuzzy_name_or_id: default_fuzzy_name_or_id(),
            fuzzy_alias_wide: default_fuzzy_alias_wide(),
        }
    }
}

fn default_exact_alias() -> u32 {
    100
}

fn default_alias_prefix() -> u32 {
    80
}

fn default_alias_substring() -> u32 {
    60
}

fn default_name_substring() -> u32 {
    50
}

fn default_id_substring() -> u32 {
    45
}

fn default_all_tokens() -> u32 {
    40
}

fn default_description_substring() -> u32 {
    20
}

fn default_category_substring() -> u32 {
    10
}

fn default_fuzzy_alias() -> u32 {
    8
}

fn default_fuzzy_name_or_id() -> u32 {
    5
}

fn default_fuzzy_alias_wide() -> u32 {
    3
}

/// Fuzzy fallback thresholds for the scorer.
///
/// The list-widget filter keeps its own fixed thresholds and does not read
/// this config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Minimum normalized query length before any fuzzy tier runs
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Minimum normalized query length for the wide distance
    #[serde(default = "default_wide_min_query_len")]
    pub wide_min_query_len: usize,

    /// Edit budget for the near fuzzy tiers
    #[serde(default = "default_near_distance")]
    pub near_distance: usize,

    /// Edit budget for the wide fuzzy tier
    #[serde(default = "default_wide_distance")]
    pub wide_distance: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            wide_min_query_len: default_wide_min_query_len(),
            near_distance: default_near_distance(),
            wide_distance: default_wide_distance(),
        }
    }
}

fn default_min_query_len() -> usize {
    3
}

fn default_wide_min_query_len() -> usize {
    4
}

fn default_near_distance() -> usize {
    1
}

fn default_wide_distance() -> usize {
    2
}

impl ScoringConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded scoring config");
        Ok(config)
    }

    /// Check that tier values keep their required ordering.
    ///
    /// Additive tiers must be strictly decreasing in table order, fuzzy
    /// tiers likewise, every fuzzy tier must score below every additive
    /// tier, and no tier may be zero (zero means "no match").
    pub fn validate(&self) -> Result<()> {
        let t = &self.tiers;
        let additive = [
            ("exact_alias", t.exact_alias),
            ("alias_prefix", t.alias_prefix),
            ("alias_substring", t.alias_substring),
            ("name_substring", t.name_substring),
            ("id_substring", t.id_substring),
            ("all_tokens", t.all_tokens),
            ("description_substring", t.description_substring),
            ("category_substring", t.category_substring),
        ];
        let fuzzy = [
            ("fuzzy_alias", t.fuzzy_alias),
            ("fuzzy_name_or_id", t.fuzzy_name_or_id),
            ("fuzzy_alias_wide", t.fuzzy_alias_wide),
        ];

        for group in [&additive[..], &fuzzy[..]] {
            for pair in group.windows(2) {
                let ((hi_name, hi), (lo_name, lo)) = (pair[0], pair[1]);
                if hi <= lo {
                    return Err(SearchError::InvalidConfig(format!(
                        "tier {hi_name} ({hi}) must score above {lo_name} ({lo})"
                    )));
                }
            }
        }

        if t.fuzzy_alias >= t.category_substring {
            return Err(SearchError::InvalidConfig(format!(
                "fuzzy tiers must score below every additive tier, got fuzzy_alias = {} and category_substring = {}",
                t.fuzzy_alias, t.category_substring
            )));
        }

        if t.fuzzy_alias_wide == 0 {
            return Err(SearchError::InvalidConfig(
                "tier fuzzy_alias_wide must be nonzero".to_string(),
            ));
        }

        let f = &self.fuzzy;
        if f.wide_distance < f.near_distance {
            return Err(SearchError::InvalidConfig(format!(
                "wide_distance ({}) must be at least near_distance ({})",
                f.wide_distance, f.near_distance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchErrorCode;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tiers.exact_alias, 100);
        assert_eq!(config.tiers.fuzzy_alias_wide, 3);
        assert_eq!(config.fuzzy.min_query_len, 3);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ScoringConfig::from_toml_str(
            r#"
            [tiers]
            exact_alias = 1000

            [fuzzy]
            wide_min_query_len = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.tiers.exact_alias, 1000);
        assert_eq!(config.tiers.alias_prefix, 80);
        assert_eq!(config.fuzzy.wide_min_query_len, 5);
        assert_eq!(config.fuzzy.near_distance, 1);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ScoringConfig::from_toml_str("").unwrap(), ScoringConfig::default());
    }

    #[test]
    fn test_reordered_tiers_rejected() {
        let err = ScoringConfig::from_toml_str("[tiers]\nname_substring = 90\n").unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::InvalidConfig);
    }

    #[test]
    fn test_fuzzy_above_additive_rejected() {
        let err = ScoringConfig::from_toml_str(
            "[tiers]\nfuzzy_alias = 12\nfuzzy_name_or_id = 11\nfuzzy_alias_wide = 10\n",
        )
        .unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::InvalidConfig);
    }

    #[test]
    fn test_bad_toml() {
        let err = ScoringConfig::from_toml_str("[tiers\n").unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::ConfigParse);
    }

    #[test]
    fn test_round_trip() {
        let config = ScoringConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ScoringConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fuzzy]\nmin_query_len = 4").unwrap();

        let config = ScoringConfig::load(file.path()).unwrap();
        assert_eq!(config.fuzzy.min_query_len, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScoringConfig::load("/nonexistent/calcfinder.toml").unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::Io);
    }
}
