//! CLI error types.

use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument passed validation by clap but not by the engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The risk computation itself failed; the message has already been
    /// printed, the variant exists to force a non-zero exit status.
    #[error("Calculation failed: {0}")]
    CalculationFailed(String),
}
