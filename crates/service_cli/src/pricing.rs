//! Demo pricer and portfolio builder.
//!
//! The engine only sees the [`Pricer`] boundary; this module provides the
//! simplest implementation that makes the binary runnable end to end: a
//! flat discount curve shifted in parallel by each scenario, applied to a
//! small swap-flavoured position template cycled up to the requested
//! trade count.

use pvar_core::traits::Pricer;
use pvar_core::types::{Portfolio, Position, PricingError, PvVector, Scenario};

/// Flat base discount rate of the demo curve.
pub const BASE_RATE: f64 = 0.02;

/// Prices positions by discounting their terminal cashflow on a flat
/// curve shifted in parallel by the scenario.
///
/// PV = notional * (1 + rate * T) * exp(-(base + shift) * T), which is
/// monotonically decreasing in the shift; the zero-shift baseline
/// reproduces the unperturbed curve exactly.
#[derive(Clone, Copy, Debug)]
pub struct CurvePricer {
    base_rate: f64,
}

impl Default for CurvePricer {
    fn default() -> Self {
        Self::new(BASE_RATE)
    }
}

impl CurvePricer {
    /// Create a pricer over a flat curve at the given base rate.
    pub fn new(base_rate: f64) -> Self {
        Self { base_rate }
    }

    fn position_pv(&self, position: &Position, shift: f64) -> f64 {
        let t = position.maturity_years();
        let terminal = position.notional() * (1.0 + position.rate() * t);
        terminal * (-(self.base_rate + shift) * t).exp()
    }
}

impl Pricer for CurvePricer {
    fn price(&self, scenario: &Scenario, portfolio: &Portfolio) -> Result<PvVector, PricingError> {
        Ok(portfolio
            .positions()
            .iter()
            .map(|position| self.position_pv(position, scenario.shift()))
            .collect())
    }
}

/// Swap-flavoured position template cycled up to the requested count.
pub fn build_portfolio(n_trades: usize) -> Portfolio {
    let template = [
        Position::new("SWAP-2Y", 1_000_000.0, 0.012, 2.0),
        Position::new("SWAP-5Y", 1_000_000.0, 0.015, 5.0),
        Position::new("SWAP-10Y", 2_000_000.0, 0.02, 10.0),
        Position::new("SWAP-30Y", 500_000.0, 0.025, 30.0),
    ];
    Portfolio::cycled(&template, n_trades)
}
