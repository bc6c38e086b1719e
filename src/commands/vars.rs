//! Implementation of the `pvault vars` command.
//!
//! Classifies a template's defined variables as referenced or orphaned and
//! reports placeholders that resolve to no defined variable.

use crate::cli::VarsArgs;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::variables::{
    find_matching_variable, is_variable_referenced, normalize_key, variable_references,
};
use serde_json::json;

/// One defined variable and whether the body references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStatus {
    /// The stored variable spelling.
    pub name: String,
    /// True when at least one placeholder resolves to this variable.
    pub referenced: bool,
}

/// Variable report for one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReport {
    /// Defined variables, in list order.
    pub variables: Vec<VariableStatus>,
    /// Placeholder names with no matching defined variable, in order of
    /// first appearance, deduplicated by normalized key.
    pub unresolved: Vec<String>,
}

/// Execute the `pvault vars` command.
pub fn cmd_vars(args: VarsArgs) -> Result<()> {
    let prompt = Prompt::load(&args.template)?;
    let report = inspect(&prompt);

    if args.json {
        let doc = json!({
            "title": prompt.title,
            "variables": report
                .variables
                .iter()
                .map(|v| json!({"name": v.name, "referenced": v.referenced}))
                .collect::<Vec<_>>(),
            "unresolved": report.unresolved,
        });
        println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        return Ok(());
    }

    println!("Variables in '{}':", prompt.title);
    if report.variables.is_empty() {
        println!("  (none defined)");
    }
    for variable in &report.variables {
        let status = if variable.referenced {
            "referenced"
        } else {
            "orphaned"
        };
        println!("  {:<20} {}", variable.name, status);
    }

    if !report.unresolved.is_empty() {
        println!();
        println!("Unresolved placeholders:");
        for name in &report.unresolved {
            println!("  {{{}}}", name);
        }
    }

    Ok(())
}

/// Build the variable report for a prompt.
pub fn inspect(prompt: &Prompt) -> VariableReport {
    let variables = prompt
        .variables
        .iter()
        .map(|name| VariableStatus {
            name: name.clone(),
            referenced: is_variable_referenced(name, &prompt.body),
        })
        .collect();

    let mut seen_keys: Vec<String> = Vec::new();
    let mut unresolved = Vec::new();
    for reference in variable_references(&prompt.body) {
        if find_matching_variable(reference, &prompt.variables).is_some() {
            continue;
        }
        let key = normalize_key(reference);
        if seen_keys.contains(&key) {
            continue;
        }
        seen_keys.push(key);
        unresolved.push(reference.to_string());
    }

    VariableReport {
        variables,
        unresolved,
    }
}
