//! Opaque portfolio representation at the pricer boundary.
//!
//! The engine never inspects positions beyond counting them; they exist so
//! that a `Pricer` implementation has something concrete to value. Trade
//! construction proper is out of scope for this crate.

/// A single priced position.
///
/// The fields are the minimum a curve-based pricer needs: a notional, a
/// contractual rate and a maturity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Position identifier.
    id: String,
    /// Notional amount.
    notional: f64,
    /// Contractual fixed rate as a fraction.
    rate: f64,
    /// Time to maturity in years.
    maturity_years: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(id: impl Into<String>, notional: f64, rate: f64, maturity_years: f64) -> Self {
        Self {
            id: id.into(),
            notional,
            rate,
            maturity_years,
        }
    }

    /// Get the position identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the notional amount.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Get the contractual fixed rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Get the time to maturity in years.
    pub fn maturity_years(&self) -> f64 {
        self.maturity_years
    }
}

/// An immutable collection of positions shared read-only across all
/// concurrent scenario evaluations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    /// Create a portfolio from a list of positions.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Build a portfolio of exactly `count` positions by cycling through a
    /// template list, repeating it as many times as needed and truncating
    /// the final pass.
    pub fn cycled(template: &[Position], count: usize) -> Self {
        let positions = template.iter().cycle().take(count).cloned().collect();
        Self { positions }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check whether the portfolio holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// View the positions as a slice.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}
