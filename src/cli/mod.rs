//! CLI argument parsing for pvault.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pvault: template substitution and version-diff core for a prompt vault.
///
/// Prompt templates are YAML or JSON files with a title, a body containing
/// `{variable}` placeholders, and a list of defined variable names.
#[derive(Parser, Debug)]
#[command(name = "pvault")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pvault.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a prompt template into its clipboard payload.
    ///
    /// Substitutes {variable} placeholders with supplied values, appends
    /// tagged blocks for unreferenced variables, and prints the payload to
    /// stdout. A notice goes to stderr if the payload crossed the
    /// configured character limit.
    Render(RenderArgs),

    /// Inspect a template's variables.
    ///
    /// Lists each defined variable as referenced or orphaned, plus any
    /// placeholders that resolve to no defined variable.
    Vars(VarsArgs),

    /// Word-level diff between two prompt versions.
    ///
    /// Compares title and body and reports which words were added or
    /// removed, oriented by the comparison mode.
    Diff(DiffArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the template file (.yaml/.yml or .json).
    pub template: PathBuf,

    /// Variable value as NAME=VALUE. May be repeated; overrides --values.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Path to a YAML or JSON file mapping variable names to values.
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// Path to a render config file (proximity_window, char_limit).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    /// Path to the template file (.yaml/.yml or .json).
    pub template: PathBuf,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `diff` command.
#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Path to the version being viewed.
    ///
    /// Named `snapshot` internally so the argument id does not collide with
    /// the global `--version` flag clap derives for every subcommand.
    #[arg(value_name = "VERSION")]
    pub snapshot: PathBuf,

    /// Path to the comparison target.
    pub target: PathBuf,

    /// Comparison orientation: "current" (version is old, target is new)
    /// or "previous" (target is old, version is new).
    #[arg(long, default_value = "current")]
    pub mode: String,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
