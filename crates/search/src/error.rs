//! Error types for the search crate.
//!
//! Scoring, filtering, normalization and edit distance are total and never
//! fail. Errors only arise at the edges: parsing a catalog snapshot or
//! loading a scoring configuration.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while loading catalog or configuration input.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Two catalog entries share an id
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// Scoring configuration TOML could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Scoring configuration parsed but violates tier ordering
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code for integration with the wider error reporting.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Catalog JSON could not be parsed
    CatalogParse = 11001,
    /// Duplicate catalog id
    DuplicateId = 11002,
    /// Config TOML could not be parsed
    ConfigParse = 11003,
    /// Config violates tier ordering
    InvalidConfig = 11004,
    /// File could not be read
    Io = 11005,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::CatalogParse(_) => SearchErrorCode::CatalogParse,
            SearchError::DuplicateId(_) => SearchErrorCode::DuplicateId,
            SearchError::ConfigParse(_) => SearchErrorCode::ConfigParse,
            SearchError::InvalidConfig(_) => SearchErrorCode::InvalidConfig,
            SearchError::Io(_) => SearchErrorCode::Io,
        }
    }
}
