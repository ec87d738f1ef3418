//! Bounded edit distance.
//!
//! Restricted Damerau–Levenshtein (optimal string alignment): insertions,
//! deletions, substitutions and adjacent transpositions each cost one, but a
//! transposed pair may not take part in any further edit. `"ca"` to `"abc"`
//! is therefore 3, not the 2 that unrestricted Damerau–Levenshtein gives.

/// Calculate the bounded edit distance between two strings.
///
/// Lengths are counted in Unicode scalar values.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
/// * `max_distance` - Largest distance worth reporting
///
/// # Returns
/// `Some(distance)` when the distance is at most `max_distance`, `None`
/// once it is known to exceed it.
///
/// # Example
/// ```
/// use calcfinder_search::bounded_distance;
///
/// assert_eq!(bounded_distance("kdip", "kdpi", 1), Some(1));
/// assert_eq!(bounded_distance("sofa", "apache", 2), None);
/// ```
pub fn bounded_distance(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m.abs_diff(n) > max_distance {
        return None;
    }

    if m == 0 {
        return (n <= max_distance).then_some(n);
    }
    if n == 0 {
        return (m <= max_distance).then_some(m);
    }

    // Transposition reads two rows back, so three rows are live.
    let mut before: Vec<usize> = vec![0; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            let mut cell = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                cell = cell.min(before[j - 2] + cost);
            }

            curr[j] = cell;
            row_min = row_min.min(cell);
        }

        // Row minima never decrease, so the budget is already blown.
        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= max_distance).then_some(distance)
}

/// Returns true if `a` and `b` are within `max_distance` edits.
#[inline]
pub fn within_distance(a: &str, b: &str, max_distance: usize) -> bool {
    bounded_distance(a, b, max_distance).is_some()
}
