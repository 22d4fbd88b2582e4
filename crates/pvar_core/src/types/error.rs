//! Error types for the pricer boundary.

use thiserror::Error;

/// Errors surfaced by a `Pricer` when a scenario cannot be valued.
///
/// A pricing failure for any single scenario fails the whole batch; the
/// message is propagated verbatim to the caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The pricer could not value the portfolio under the given scenario.
    #[error("Pricing failed: {0}")]
    Failure(String),

    /// Required market data was missing from the pricer's snapshot.
    #[error("Missing market data: {0}")]
    MissingMarketData(String),
}
