//! Distance command - bounded edit distance between two strings

use anyhow::Result;
use calcfinder_search::bounded_distance;
use owo_colors::OwoColorize;

/// Run distance command
pub fn run(a: &str, b: &str, max: usize) -> Result<()> {
    match bounded_distance(a, b, max) {
        Some(distance) => println!("{distance}"),
        None => println!("{} (max {max})", "exceeds".yellow()),
    }

    Ok(())
}
