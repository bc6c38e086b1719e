//! Word-level diffing between prompt versions.
//!
//! This module powers the version-history view: it produces word-level
//! change lists between two texts, selects which side of a comparison is
//! "old" vs "new" for a given viewing mode, and decides whether two prompt
//! snapshots are identical.
//!
//! The diff itself is a longest-common-subsequence over alternating
//! word/whitespace tokens; adjacent tokens with the same fate merge into a
//! single [`Change`]. At any replacement point removals are emitted before
//! insertions.

mod words;


use crate::prompt::Prompt;

pub use words::compute_diff;

/// The fate of one contiguous run of text in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Present in both texts.
    Unchanged,
    /// Present only in the new text.
    Added,
    /// Present only in the old text.
    Removed,
}

/// One contiguous segment of a word-level diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// What happened to this segment.
    pub kind: ChangeKind,
    /// The segment text, including any whitespace it carries.
    pub value: String,
}

impl Change {
    /// True when this segment exists only in the new text.
    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    /// True when this segment exists only in the old text.
    pub fn is_removed(&self) -> bool {
        self.kind == ChangeKind::Removed
    }
}

/// Which way a version comparison is oriented.
///
/// The direction controls which side of the diff renders as added vs
/// removed, so the mapping in [`comparison_pair`] must not be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Compare a snapshot against the current prompt: the snapshot is old,
    /// the current prompt is new.
    #[default]
    Current,
    /// Compare a snapshot against the previous snapshot: the previous
    /// snapshot is old, the selected snapshot is new.
    Previous,
}

impl DiffMode {
    /// Parse a diff mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "current" => Some(Self::Current),
            "previous" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// The two sides of a version comparison, oriented for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonPair<'a> {
    /// The side whose unique text renders as removed.
    pub old: &'a Prompt,
    /// The side whose unique text renders as added.
    pub new: &'a Prompt,
}

/// Orient a version and its comparison target for the given mode.
///
/// * `DiffMode::Current`: `{ old: version, new: target }`
/// * `DiffMode::Previous`: `{ old: target, new: version }`
pub fn comparison_pair<'a>(
    version: &'a Prompt,
    target: &'a Prompt,
    mode: DiffMode,
) -> ComparisonPair<'a> {
    match mode {
        DiffMode::Current => ComparisonPair {
            old: version,
            new: target,
        },
        DiffMode::Previous => ComparisonPair {
            old: target,
            new: version,
        },
    }
}

/// True iff title, body, and variables (element-wise, in order) are equal.
///
/// Convenience alias for [`Prompt::is_identical`] at the diffing call site.
pub fn are_prompts_identical(a: &Prompt, b: &Prompt) -> bool {
    a.is_identical(b)
}
