//! Pvault: template substitution and version-diff core for a personal
//! prompt vault.
//!
//! Prompts are reusable text templates containing `{variable}` placeholders.
//! This crate implements the logic with real semantics behind the vault:
//!
//! - [`payload`] builds the exact string to place on the clipboard,
//!   including the tagged fallback encoding for isolated placeholders and
//!   unreferenced variables, and the oversize duplication guard.
//! - [`variables`] normalizes variable names (whitespace-insensitive,
//!   case-sensitive), parses placeholder references, and deduplicates
//!   variable lists.
//! - [`diff`] produces word-level diffs between prompt versions and orients
//!   comparisons for display.
//!
//! All core functions are pure and total: they never error, never panic on
//! malformed input, and hold no state between calls. Persistence, clipboard
//! access, and UI are external collaborators.
//!
//! # Example
//!
//! ```
//! use pvault::payload::build_payload;
//! use pvault::prompt::{Prompt, VariableValues};
//!
//! let prompt = Prompt::new("Greeting", "Hi {name}!", vec!["name".to_string()]);
//! let mut values = VariableValues::new();
//! values.insert("name".to_string(), "Sam".to_string());
//!
//! assert_eq!(build_payload(&prompt, &values), "Hi Sam!");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod payload;
pub mod prompt;
pub mod variables;
