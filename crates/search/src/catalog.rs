//! Catalog entries as supplied by the surrounding application.

use crate::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One searchable record in the calculator catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique, slug-like identifier (e.g. `ckd-epi-creatinine`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Explicit aliases, in catalog order
    #[serde(default)]
    pub search_terms: Vec<String>,
}

impl CatalogEntry {
    /// Creates an entry with empty description, category and aliases.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            search_terms: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the alias list.
    pub fn with_search_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_terms = terms.into_iter().map(Into::into).collect();
        self
    }
}

/// Parse a catalog snapshot from a JSON array of entries.
///
/// Ids must be unique; the first repeated id is reported as
/// [`SearchError::DuplicateId`].
///
/// # Example
/// ```
/// use calcfinder_search::parse_catalog;
///
/// let entries = parse_catalog(r#"[{"id": "kdpi", "name": "KDPI", "searchTerms": ["kdri"]}]"#).unwrap();
/// assert_eq!(entries[0].search_terms, vec!["kdri"]);
/// ```
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(entries.len());
    if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id.as_str())) {
        return Err(SearchError::DuplicateId(dup.id.clone()));
    }

    tracing::debug!(entries = entries.len(), "Parsed catalog");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchErrorCode;

    #[test]
    fn test_parse_catalog() {
        let json = r#"[
            {
                "id": "ckd-epi-creatinine",
                "name": "CKD-EPI Creatinine (2021)",
                "description": "Estimates GFR from serum creatinine",
                "category": "Nephrology",
                "searchTerms": ["egfr", "gfr"]
            },
            { "id": "kdpi", "name": "KDPI" }
        ]"#;

        let entries = parse_catalog(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].search_terms, vec!["egfr", "gfr"]);
        assert_eq!(entries[0].category, "Nephrology");
        assert!(entries[1].search_terms.is_empty());
        assert!(entries[1].description.is_empty());
    }

    #[test]
    fn test_parse_catalog_duplicate_id() {
        let json = r#"[{"id": "sofa", "name": "SOFA"}, {"id": "sofa", "name": "SOFA 2"}]"#;
        let err = parse_catalog(json).unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::DuplicateId);
    }

    #[test]
    fn test_parse_catalog_invalid_json() {
        let err = parse_catalog("{not json").unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::CatalogParse);
    }

    #[test]
    fn test_builder() {
        let entry = CatalogEntry::new("sofa", "SOFA Score")
            .with_category("Critical Care")
            .with_search_terms(["sofa"]);
        assert_eq!(entry.search_terms, vec!["sofa".to_string()]);
        assert_eq!(entry.category, "Critical Care");
    }

    #[test]
    fn test_serializes_camel_case() {
        let entry = CatalogEntry::new("kdpi", "KDPI").with_search_terms(["kdri"]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["searchTerms"][0], "kdri");
    }
}
