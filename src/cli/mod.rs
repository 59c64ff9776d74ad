//! CLI support for bases-filter
//!
//! Provides programmatic access to the command-line checks so other tools can
//! run them without spawning the binary.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, execute_check, execute_yaml};
pub use docs::render_syntax_help;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The filter failed to tokenize, parse or validate
    #[error("{0}")]
    Filter(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No filter provided. Pass an expression or pipe one to stdin.")]
    NoInput,
}
