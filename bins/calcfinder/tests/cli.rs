use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");

fn calcfinder() -> Command {
    let mut cmd = Command::cargo_bin("calcfinder").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("CALCFINDER_CONFIG");
    cmd
}

fn ranked_ids(output: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(output).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn rank_puts_exact_alias_first() {
    let output = calcfinder()
        .args(["rank", "sofa", "--json", "--catalog", CATALOG])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(ranked_ids(&output.stdout), vec!["sofa", "qsofa"]);
}

#[test]
fn rank_explain_lists_tiers() {
    let output = calcfinder()
        .args(["rank", "kdip", "--json", "--explain", "--catalog", CATALOG])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["id"], "kdpi");
    assert_eq!(value[0]["score"], 5);
    assert_eq!(value[0]["tiers"][0], "fuzzy_name_or_id");
}

#[test]
fn rank_empty_query_matches_nothing() {
    let output = calcfinder()
        .args(["rank", "", "--json", "--catalog", CATALOG])
        .output()
        .unwrap();

    assert!(ranked_ids(&output.stdout).is_empty());
}

#[test]
fn rank_honours_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[fuzzy]\nmin_query_len = 5").unwrap();

    let output = calcfinder()
        .args(["rank", "kdip", "--json", "--catalog", CATALOG, "--config"])
        .arg(config.path())
        .output()
        .unwrap();

    assert!(ranked_ids(&output.stdout).is_empty());
}

#[test]
fn filter_rejects_scoring_config() {
    calcfinder()
        .args(["filter", "kdip", "--catalog", CATALOG, "--config", "calcfinder.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn filter_empty_search_keeps_everything() {
    let output = calcfinder()
        .args(["filter", "", "--json", "--catalog", CATALOG])
        .output()
        .unwrap();

    assert_eq!(ranked_ids(&output.stdout).len(), 6);
}

#[test]
fn filter_keeps_catalog_order() {
    let output = calcfinder()
        .args(["filter", "nephrology", "--json", "--catalog", CATALOG])
        .output()
        .unwrap();

    // Category is not a filter keyword, so nothing matches on it.
    assert!(ranked_ids(&output.stdout).is_empty());

    let output = calcfinder()
        .args(["filter", "score", "--json", "--catalog", CATALOG])
        .output()
        .unwrap();

    assert_eq!(ranked_ids(&output.stdout), vec!["sofa", "qsofa"]);
}

#[test]
fn distance_reports_transposition() {
    calcfinder()
        .args(["distance", "ab", "ba", "--max", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn distance_reports_exceeds() {
    calcfinder()
        .args(["distance", "sofa", "kidney", "--max", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds"));
}

#[test]
fn missing_catalog_fails() {
    calcfinder()
        .args(["rank", "sofa", "--catalog", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}
