//! Payload building: template + values → the exact string to copy.
//!
//! The builder substitutes `{variable}` placeholders with user-supplied
//! values, falls back to a tagged `<Name>value</Name>` encoding for
//! placeholders that sit isolated in the text and for defined variables that
//! are never referenced, and applies the oversize duplication guard.
//!
//! Everything here is pure and total: unresolved placeholders pass through
//! unchanged, missing values default to the empty string, and no input
//! produces an error.

use crate::config::RenderConfig;
use crate::prompt::{Prompt, VariableValues};
use crate::variables::{find_matching_variable, is_variable_referenced, placeholder_matches};


/// Build the clipboard payload for a prompt using the default config.
///
/// See [`build_payload_with`] for the full substitution rules.
pub fn build_payload(prompt: &Prompt, values: &VariableValues) -> String {
    build_payload_with(prompt, values, &RenderConfig::default())
}

/// Build the clipboard payload for a prompt.
///
/// Substitution proceeds in three stages:
///
/// 1. Each distinct literal placeholder from the original body (in order of
///    first appearance) is resolved against `prompt.variables` via
///    normalized-name matching. Unresolved placeholders are left untouched.
///    Every occurrence of a resolved placeholder is replaced: isolated
///    occurrences (no non-whitespace character within
///    `config.proximity_window` characters on either side) become
///    `<Name>value</Name>`; all others become the raw value. Isolation is
///    judged against the body as it stood when that placeholder's pass
///    began, so substitutions made for one placeholder affect the proximity
///    checks of other placeholders but never those of its own remaining
///    occurrences.
/// 2. Defined variables with no reference anywhere in the original body are
///    appended as `<Name>value</Name>` blocks in list order, preceded by a
///    single newline iff the body does not already end with one.
/// 3. If the result exceeds `config.char_limit` characters, the payload is
///    duplicated: `result + " " + result`. The doubling is longstanding
///    observed behavior, preserved for compatibility; callers surface a
///    notice when the length crosses the limit.
///
/// Values are looked up by the variable's exact stored spelling and default
/// to `""`.
pub fn build_payload_with(
    prompt: &Prompt,
    values: &VariableValues,
    config: &RenderConfig,
) -> String {
    let mut body = prompt.body.clone();

    // Distinct literal placeholders, in order of first appearance.
    let mut placeholders: Vec<(&str, &str)> = Vec::new();
    for (literal, inner) in placeholder_matches(&prompt.body) {
        if !placeholders.iter().any(|(seen, _)| *seen == literal) {
            placeholders.push((literal, inner));
        }
    }

    for (literal, inner) in placeholders {
        let Some(name) = find_matching_variable(inner, &prompt.variables) else {
            continue;
        };
        let value = lookup(values, name);

        // Every occurrence of this literal is judged against the body as it
        // stood when this pass began; replacements land in a rebuilt copy so
        // they cannot influence this placeholder's own later occurrences
        // (and inserted text is never rescanned).
        let snapshot = body;
        let mut rebuilt = String::with_capacity(snapshot.len());
        let mut cursor = 0;
        while let Some(offset) = snapshot[cursor..].find(literal) {
            let start = cursor + offset;
            let end = start + literal.len();

            rebuilt.push_str(&snapshot[cursor..start]);
            if is_isolated(&snapshot, start, end, config.proximity_window) {
                rebuilt.push_str(&tagged_block(name, value));
            } else {
                rebuilt.push_str(value);
            }
            cursor = end;
        }
        rebuilt.push_str(&snapshot[cursor..]);
        body = rebuilt;
    }

    // Orphaned variables: defined but never referenced in the original body.
    let orphans: Vec<&String> = prompt
        .variables
        .iter()
        .filter(|variable| !is_variable_referenced(variable, &prompt.body))
        .collect();

    if !orphans.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }
    for name in orphans {
        body.push_str(&tagged_block(name, lookup(values, name)));
    }

    // Character limit guard. Doubling does not reduce the length; the policy
    // is preserved as observed.
    if body.chars().count() > config.char_limit {
        body = format!("{} {}", body, body);
    }

    body
}

/// Look up a variable's value by exact stored spelling, defaulting to `""`.
fn lookup<'a>(values: &'a VariableValues, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or("")
}

/// The `<Name>value</Name>` fallback encoding.
fn tagged_block(name: &str, value: &str) -> String {
    format!("<{name}>{value}</{name}>")
}

/// Check whether the placeholder spanning `start..end` sits isolated.
///
/// Scans up to `window` characters immediately before `start` and after
/// `end`; the placeholder is isolated when neither side contains a
/// non-whitespace character. String boundaries count as whitespace.
fn is_isolated(body: &str, start: usize, end: usize, window: usize) -> bool {
    let before_clear = body[..start]
        .chars()
        .rev()
        .take(window)
        .all(char::is_whitespace);
    let after_clear = body[end..].chars().take(window).all(char::is_whitespace);

    before_clear && after_clear
}
