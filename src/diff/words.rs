//! Tokenization and LCS core for the word-level differ.

use super::{Change, ChangeKind};

/// Compute the word-level diff between two texts.
///
/// Texts are tokenized into alternating runs of non-whitespace and
/// whitespace; the diff is a longest-common-subsequence alignment over
/// those tokens. Adjacent tokens with the same [`ChangeKind`] merge into a
/// single [`Change`], so identical inputs produce exactly one unchanged
/// segment carrying the whole text. Empty inputs contribute nothing.
pub fn compute_diff(old: &str, new: &str) -> Vec<Change> {
    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);

    merge(align(&old_tokens, &new_tokens))
}

/// Split text into alternating non-whitespace / whitespace runs.
///
/// Every character of the input lands in exactly one token, so the
/// concatenation of all tokens reproduces the input.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (index, ch) in text.char_indices() {
        let is_whitespace = ch.is_whitespace();
        match in_whitespace {
            Some(previous) if previous != is_whitespace => {
                tokens.push(&text[start..index]);
                start = index;
                in_whitespace = Some(is_whitespace);
            }
            Some(_) => {}
            None => in_whitespace = Some(is_whitespace),
        }
    }

    if !text.is_empty() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Align two token sequences via longest common subsequence.
///
/// Returns one `(kind, token)` op per token, in display order. Within a
/// replaced region, removed tokens come before added tokens.
fn align<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<(ChangeKind, &'a str)> {
    let n = old.len();
    let m = new.len();

    // lengths[i][j] = LCS length of old[..i] and new[..j]
    let mut lengths = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            lengths[i][j] = if old[i - 1] == new[j - 1] {
                lengths[i - 1][j - 1] + 1
            } else {
                lengths[i - 1][j].max(lengths[i][j - 1])
            };
        }
    }

    // Walk back from the full alignment, collecting ops in reverse.
    // Consuming additions before removals here puts removals first once
    // the list is reversed.
    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            ops.push((ChangeKind::Unchanged, old[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || lengths[i][j - 1] >= lengths[i - 1][j]) {
            ops.push((ChangeKind::Added, new[j - 1]));
            j -= 1;
        } else {
            ops.push((ChangeKind::Removed, old[i - 1]));
            i -= 1;
        }
    }
    ops.reverse();

    ops
}

/// Merge consecutive ops of the same kind into contiguous changes.
fn merge(ops: Vec<(ChangeKind, &str)>) -> Vec<Change> {
    let mut changes: Vec<Change> = Vec::new();

    for (kind, token) in ops {
        match changes.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(token),
            _ => changes.push(Change {
                kind,
                value: token.to_string(),
            }),
        }
    }

    changes
}
