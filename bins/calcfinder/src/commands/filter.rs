//! Filter command - binary match over the catalog, in catalog order

use anyhow::Result;
use calcfinder_search::filter_catalog;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run filter command
pub fn run(catalog: &Path, search: &str, json: bool) -> Result<()> {
    let entries = super::load_catalog(catalog)?;
    let kept = filter_catalog(&entries, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&kept)?);
        return Ok(());
    }

    for entry in &kept {
        println!("  {:<28} {}", entry.id, entry.name.dimmed());
    }

    println!();
    println!("{} {} of {} entries shown", "✓".green(), kept.len(), entries.len());

    Ok(())
}
