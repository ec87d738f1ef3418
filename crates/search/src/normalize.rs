//! Text normalization for comparisons.

/// Returns true for characters removed by [`normalize`].
///
/// The set is fixed: subscript and superscript digits, hyphen, underscore,
/// slash and parentheses.
#[inline]
pub fn is_stripped(c: char) -> bool {
    matches!(
        c,
        '\u{2080}'..='\u{2089}'
            | '\u{2070}'
            | '\u{00B9}'
            | '\u{00B2}'
            | '\u{00B3}'
            | '\u{2074}'..='\u{2079}'
            | '-'
            | '_'
            | '/'
            | '('
            | ')'
    )
}

/// Canonicalize a string for comparison.
///
/// Lowercases, drops the characters matched by [`is_stripped`], collapses
/// whitespace runs to a single space and trims both ends. Any other
/// character passes through lowercased.
///
/// # Example
/// ```
/// use calcfinder_search::normalize;
///
/// assert_eq!(normalize("CKD-EPI  Creatinine (2021)"), "ckdepi creatinine 2021");
/// assert_eq!(normalize("PaO₂/FiO₂"), "paofio");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        if is_stripped(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

/// Lowercase `s` and drop hyphens and underscores.
///
/// Used for catalog ids, which are slug-like (`kdigo-aki-staging`).
pub(crate) fn compact_id(id: &str) -> String {
    id.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Remove all whitespace from `s`.
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
