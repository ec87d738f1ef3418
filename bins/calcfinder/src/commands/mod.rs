//! Command implementations

pub mod distance;
pub mod filter;
pub mod rank;

use anyhow::{Context, Result};
use calcfinder_search::CatalogEntry;
use std::path::Path;

/// Read and parse a catalog JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    calcfinder_search::parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))
}
