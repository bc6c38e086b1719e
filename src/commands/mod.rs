//! Command implementations for pvault.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod diff_cmd;
mod render;
mod vars;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Vars(args) => vars::cmd_vars(args),
        Command::Diff(args) => diff_cmd::cmd_diff(args),
    }
}
