//! Scoring config discovery for the CLI.

use anyhow::{Context, Result};
use calcfinder_search::ScoringConfig;
use std::path::{Path, PathBuf};

/// Config file names checked in the working directory, in order.
const CANDIDATES: [&str; 3] = [".calcfinder.toml", "calcfinder.toml", ".config/calcfinder.toml"];

/// Load the explicit config, else the first config file found, else defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(find_config_file) else {
        tracing::debug!("No scoring config found, using defaults");
        return Ok(ScoringConfig::default());
    };

    ScoringConfig::load(&path)
        .with_context(|| format!("Failed to load scoring config {}", path.display()))
}

/// Find a configuration file in the standard locations.
fn find_config_file() -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tiers]\nexact_alias = 500").unwrap();

        let config = resolve(Some(file.path())).unwrap();
        assert_eq!(config.tiers.exact_alias, 500);
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let err = resolve(Some(Path::new("/nonexistent/calcfinder.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load scoring config"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tiers]\ncategory_substring = 200").unwrap();

        assert!(resolve(Some(file.path())).is_err());
    }
}
