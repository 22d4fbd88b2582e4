//! Value types shared across the engine.

mod error;
mod portfolio;
mod scenario;

pub use error::PricingError;
pub use portfolio::{Portfolio, Position};
pub use scenario::{Scenario, ScenarioSet};

/// Per-position present values produced by pricing a single scenario.
///
/// One entry per priced position; every vector aggregated together must
/// have the same length, which the aggregator enforces explicitly.
pub type PvVector = Vec<f64>;
