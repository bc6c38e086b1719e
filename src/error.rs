//! Error types for the pvault CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! The template core itself (payload building, variable matching, diffing) is
//! total and never returns these errors; they exist only at the I/O boundary
//! where template, values, and config files are loaded.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pvault operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum VaultError {
    /// User provided invalid arguments or referenced a missing file.
    #[error("{0}")]
    UserError(String),

    /// A template, values, or config file could not be parsed.
    #[error("Parse failed: {0}")]
    ParseError(String),
}

impl VaultError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::UserError(_) => exit_codes::USER_ERROR,
            VaultError::ParseError(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for pvault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
