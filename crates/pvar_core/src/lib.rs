//! # pvar Core (L1: Foundation)
//!
//! Shared value types, the pricer boundary and timing utilities for the
//! pvar scenario revaluation engine.
//!
//! This crate provides:
//! - `Scenario` / `ScenarioSet`: immutable market perturbation definitions
//! - `PvVector`: per-position present values produced by pricing one scenario
//! - `Portfolio` / `Position`: the opaque trade representation consumed by
//!   pricers
//! - `Pricer`: the sole interface the engine consumes from the external
//!   pricing subsystem
//! - `Stopwatch`: a scoped timer guard with guaranteed reporting on all exit
//!   paths
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             pvar_core (L1)              │
//! ├─────────────────────────────────────────┤
//! │  types/   - Scenario, ScenarioSet,      │
//! │             PvVector, Portfolio         │
//! │  traits/  - Pricer boundary             │
//! │  stopwatch - scoped elapsed-time guard  │
//! └─────────────────────────────────────────┘
//! ```

pub mod stopwatch;
pub mod traits;
pub mod types;

pub use stopwatch::Stopwatch;
pub use traits::Pricer;
pub use types::{Portfolio, Position, PricingError, PvVector, Scenario, ScenarioSet};
