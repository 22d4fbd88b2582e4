//! Error types for risk metric calculations.

use thiserror::Error;

/// Errors from VaR and Expected Shortfall calculations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MetricsError {
    /// The loss series was empty; no scenario exists to measure.
    #[error("Loss series must contain at least one value")]
    EmptySeries,

    /// The confidence level was outside the open interval (0, 1).
    #[error("Confidence level should be between 0 and 1 exclusive, got: {0}")]
    InvalidConfidenceLevel(f64),

    /// The series is too short to resolve the requested confidence level.
    #[error(
        "Not enough values in series ({len}) to obtain scenario id >= 1 \
         for confidence level {confidence_level}"
    )]
    InsufficientScenarios {
        /// Length of the loss series.
        len: usize,
        /// The requested confidence level.
        confidence_level: f64,
    },

    /// The requested scenario id was outside `[1, len]`.
    #[error("Scenario id to obtain VaR for must be between 1 and {len}, got: {scenario}")]
    ScenarioOutOfRange {
        /// Length of the loss series.
        len: usize,
        /// The offending scenario id.
        scenario: f64,
    },

    /// The requested loss count was outside `[1, len]`.
    #[error("Number of losses must be between 1 and {len}, got: {losses}")]
    LossCountOutOfRange {
        /// Length of the loss series.
        len: usize,
        /// The offending loss count.
        losses: f64,
    },
}
