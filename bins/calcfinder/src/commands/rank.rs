//! Rank command - score every entry and print the matches

use anyhow::Result;
use calcfinder_search::{matched_tiers, rank_catalog, ScoringConfig, Tier};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// JSON output for one ranked entry
#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    id: &'a str,
    name: &'a str,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tiers: Option<Vec<Tier>>,
}

/// Run rank command
pub fn run(
    catalog: &Path,
    query: &str,
    config: &ScoringConfig,
    limit: Option<usize>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let entries = super::load_catalog(catalog)?;
    let results = rank_catalog(&entries, query, config, limit);

    let ranked: Vec<RankedEntry> = results
        .iter()
        .map(|r| RankedEntry {
            id: &r.item.id,
            name: &r.item.name,
            score: r.score,
            tiers: explain.then(|| matched_tiers(r.item, query, &config.fuzzy)),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("{} No matches for {:?}", "ℹ".blue(), query);
        return Ok(());
    }

    for entry in &ranked {
        println!(
            "  {:>5}  {:<28} {}",
            entry.score.green().bold(),
            entry.id,
            entry.name.dimmed()
        );
        if let Some(tiers) = &entry.tiers {
            let labels: Vec<String> = tiers
                .iter()
                .map(|t| format!("{} +{}", t.label(), t.points(&config.tiers)))
                .collect();
            println!("         {}", labels.join(", ").dimmed());
        }
    }

    println!();
    println!(
        "{} {} of {} entries matched",
        "✓".green(),
        ranked.len(),
        entries.len()
    );

    Ok(())
}
