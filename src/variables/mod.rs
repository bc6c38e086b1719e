//! Variable name matching, placeholder parsing, and list hygiene.
//!
//! Variable names compare through a normalized key: surrounding whitespace is
//! trimmed and all internal whitespace is removed, while case is preserved.
//! So `"first name"` and `"firstname"` are the same variable, but
//! `"FirstName"` and `"firstname"` are not. Deduplication, placeholder
//! resolution, and version diff labeling all rely on this exact asymmetry.
//!
//! A placeholder is a `{name}` occurrence in a prompt body: `{`, one or more
//! characters that are not `}`, then `}`. Matches are found left-to-right and
//! do not overlap.

use regex::Regex;
use std::sync::LazyLock;


/// Regex for `{name}` placeholder references in a prompt body.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("Invalid placeholder regex"));

/// Produce the comparison key for a variable name.
///
/// Trims surrounding whitespace and removes all internal whitespace.
/// Case is preserved.
pub fn normalize_key(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Iterate over each placeholder's literal text and trimmed inner name,
/// left-to-right, without deduplication.
pub(crate) fn placeholder_matches(body: &str) -> impl Iterator<Item = (&str, &str)> {
    PLACEHOLDER_REGEX
        .captures_iter(body)
        .filter_map(|caps| match (caps.get(0), caps.get(1)) {
            (Some(full), Some(inner)) => Some((full.as_str(), inner.as_str().trim())),
            _ => None,
        })
}

/// Iterate over each placeholder's trimmed inner text in order of
/// appearance, without deduplication.
///
/// The iterator borrows `body` and is restartable by calling again.
pub fn variable_references(body: &str) -> impl Iterator<Item = &str> {
    placeholder_matches(body).map(|(_, inner)| inner)
}

/// Collect every placeholder's trimmed inner text, in order, duplicates kept.
///
/// Callers that need uniqueness deduplicate separately using
/// [`normalize_key`].
pub fn parse_variable_references(body: &str) -> Vec<String> {
    variable_references(body).map(str::to_string).collect()
}

/// Resolve a referenced name to a defined variable.
///
/// Returns the first entry in `defined` (slice order) whose normalized key
/// equals the normalized key of `referenced`, or `None` if no entry matches.
/// First match wins if the dedup invariant was violated upstream.
pub fn find_matching_variable<'a>(referenced: &str, defined: &'a [String]) -> Option<&'a str> {
    let key = normalize_key(referenced);
    defined
        .iter()
        .find(|candidate| normalize_key(candidate) == key)
        .map(String::as_str)
}

/// Check whether `body` contains a placeholder that resolves to `variable`.
pub fn is_variable_referenced(variable: &str, body: &str) -> bool {
    let key = normalize_key(variable);
    variable_references(body).any(|reference| normalize_key(reference) == key)
}

/// Clean a variable list: trim entries, drop blanks, deduplicate.
///
/// Entries that are empty after trimming are dropped. Entries whose
/// normalized key was already seen are dropped; the first occurrence's
/// trimmed (non-normalized) spelling is kept. First-occurrence order is
/// preserved. Never fails.
pub fn sanitize_variables(names: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();

    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }

        let key = normalize_key(trimmed);
        if seen.contains(&key) {
            continue;
        }

        seen.push(key);
        result.push(trimmed.to_string());
    }

    result
}
