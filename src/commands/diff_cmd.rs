//! Implementation of the `pvault diff` command.
//!
//! Loads two prompt versions, orients them by the comparison mode, and
//! prints a word-level diff of the title and body. Added text renders as
//! `{+text+}`, removed text as `[-text-]`.

use crate::cli::DiffArgs;
use crate::diff::{
    Change, ChangeKind, DiffMode, are_prompts_identical, comparison_pair, compute_diff,
};
use crate::error::{Result, VaultError};
use crate::prompt::Prompt;
use serde_json::{Value, json};

/// Execute the `pvault diff` command.
pub fn cmd_diff(args: DiffArgs) -> Result<()> {
    let version = Prompt::load(&args.snapshot)?;
    let target = Prompt::load(&args.target)?;

    let mode = DiffMode::from_str(&args.mode).ok_or_else(|| {
        VaultError::UserError(format!(
            "invalid --mode '{}': expected 'current' or 'previous'",
            args.mode
        ))
    })?;

    let pair = comparison_pair(&version, &target, mode);
    let identical = are_prompts_identical(pair.old, pair.new);

    let title_changes = compute_diff(&pair.old.title, &pair.new.title);
    let body_changes = compute_diff(&pair.old.body, &pair.new.body);

    if args.json {
        let doc = json!({
            "identical": identical,
            "title": changes_json(&title_changes),
            "body": changes_json(&body_changes),
            "old_variables": pair.old.variables,
            "new_variables": pair.new.variables,
        });
        println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        return Ok(());
    }

    if identical {
        println!("Versions are identical.");
        return Ok(());
    }

    println!("Title: {}", render_changes(&title_changes));
    println!();
    println!("{}", render_changes(&body_changes));

    if pair.old.variables != pair.new.variables {
        println!();
        println!("Variables: {:?} -> {:?}", pair.old.variables, pair.new.variables);
    }

    Ok(())
}

/// Render a change list with `{+added+}` / `[-removed-]` markers.
fn render_changes(changes: &[Change]) -> String {
    let mut out = String::new();
    for change in changes {
        match change.kind {
            ChangeKind::Unchanged => out.push_str(&change.value),
            ChangeKind::Added => {
                out.push_str("{+");
                out.push_str(&change.value);
                out.push_str("+}");
            }
            ChangeKind::Removed => {
                out.push_str("[-");
                out.push_str(&change.value);
                out.push_str("-]");
            }
        }
    }
    out
}

/// Serialize changes as `{value, added?, removed?}` objects, flags present
/// only when set.
fn changes_json(changes: &[Change]) -> Vec<Value> {
    changes
        .iter()
        .map(|change| match change.kind {
            ChangeKind::Unchanged => json!({"value": change.value}),
            ChangeKind::Added => json!({"value": change.value, "added": true}),
            ChangeKind::Removed => json!({"value": change.value, "removed": true}),
        })
        .collect()
}
