//! Binary match signal for filterable list widgets.
//!
//! List widgets ask "does this row match?" rather than "how well?", and
//! show every row while the search box is empty. That default is the
//! opposite of [`crate::score`], which returns 0 for an empty query.

use crate::fuzzy::within_distance;
use crate::normalize::normalize;
use crate::relevance::all_tokens_present;

/// Filter signal for a row that matches.
pub const MATCH: u8 = 1;

/// Filter signal for a row that does not match.
pub const NO_MATCH: u8 = 0;

/// Decide whether a list row matches the search box.
///
/// # Arguments
/// * `value` - The row's primary text
/// * `search` - The raw search text
/// * `keywords` - Extra terms the row should also match on
///
/// # Returns
/// `true` for an empty search, a substring hit, every token present, or a
/// word within edit distance (2 for searches of four or more characters,
/// else 1; searches shorter than three characters never match fuzzily).
pub fn matches_filter<S: AsRef<str>>(value: &str, search: &str, keywords: &[S]) -> bool {
    let raw = search.trim().to_lowercase();
    if raw.is_empty() {
        return true;
    }
    let normalized = normalize(&raw);

    let mut haystack = normalize(value);
    for keyword in keywords {
        let keyword = normalize(keyword.as_ref());
        if !keyword.is_empty() {
            if !haystack.is_empty() {
                haystack.push(' ');
            }
            haystack.push_str(&keyword);
        }
    }

    if haystack.contains(raw.as_str())
        || (!normalized.is_empty() && haystack.contains(normalized.as_str()))
    {
        return true;
    }

    if all_tokens_present(&normalized, &haystack) {
        return true;
    }

    let len = normalized.chars().count();
    if len < 3 {
        return false;
    }
    let max_edit = if len >= 4 { 2 } else { 1 };

    haystack
        .split_whitespace()
        .any(|word| within_distance(word, &normalized, max_edit))
}

/// [`matches_filter`] as the 0/1 signal list widgets expect.
///
/// # Example
/// ```
/// use calcfinder_search::filter_matches;
///
/// let keywords = ["sofa", "sepsis"];
/// assert_eq!(filter_matches("SOFA Score", "", &keywords), 1);
/// assert_eq!(filter_matches("SOFA Score", "sepsis", &keywords), 1);
/// assert_eq!(filter_matches("SOFA Score", "apache", &keywords), 0);
/// ```
pub fn filter_matches<S: AsRef<str>>(value: &str, search: &str, keywords: &[S]) -> u8 {
    if matches_filter(value, search, keywords) {
        MATCH
    } else {
        NO_MATCH
    }
}
