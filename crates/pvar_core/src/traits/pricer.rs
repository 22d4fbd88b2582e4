//! The pricer boundary.
//!
//! The engine treats pricing as an opaque capability: given a scenario and
//! a portfolio, produce one present value per position or fail. Everything
//! behind this trait (curve perturbation, market data, instrument
//! analytics) belongs to the external pricing subsystem.

use crate::types::{Portfolio, PricingError, PvVector, Scenario};

/// Values a portfolio under a single scenario.
///
/// Implementations are shared read-only across all concurrent scenario
/// evaluations, hence the `Sync` bound; they must not mutate any market
/// data they close over.
pub trait Pricer: Sync {
    /// Price every position in the portfolio under the given scenario.
    ///
    /// The returned vector has one entry per position, in portfolio order.
    fn price(&self, scenario: &Scenario, portfolio: &Portfolio) -> Result<PvVector, PricingError>;
}

/// Closures can act as pricers, which keeps stub pricers in tests terse.
impl<F> Pricer for F
where
    F: Fn(&Scenario, &Portfolio) -> Result<PvVector, PricingError> + Sync,
{
    fn price(&self, scenario: &Scenario, portfolio: &Portfolio) -> Result<PvVector, PricingError> {
        self(scenario, portfolio)
    }
}
