//! # pvar Metrics (L3: Risk Statistics)
//!
//! Value-at-Risk and Expected Shortfall over a simulated loss
//! distribution.
//!
//! The calculator holds an immutable descending-sorted loss series and
//! estimates quantiles by linear interpolation between adjacent order
//! statistics; Expected Shortfall is a fractionally weighted average of
//! the worst losses. All operations are pure functions over the series.

mod error;
mod var;

pub use error::MetricsError;
pub use var::VarCalculator;
