//! # pvar Engine (L2: Computation)
//!
//! Scenario-parallel present value evaluation and aggregation.
//!
//! This crate provides:
//! - `ScenarioGenerator`: baseline plus bounded random curve shifts
//! - `EvaluationBackend`: interchangeable execution strategies mapping
//!   scenarios to PV vectors (`LocalBackend`, `PartitionedBackend`)
//! - `aggregator`: elementwise reduction of PV vectors into one aggregate
//! - `PvSeriesCalculator`: the orchestrator tying the above together
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               pvar_engine (L2)               │
//! ├──────────────────────────────────────────────┤
//! │  generator  - ScenarioSet production         │
//! │  backend/   - LocalBackend (rayon pool)      │
//! │               PartitionedBackend (shards)    │
//! │  aggregator - elementwise PV reduction       │
//! │  calculator - config + end-to-end run        │
//! └──────────────────────────────────────────────┘
//!          ↓ (Pricer boundary)
//! ┌──────────────────────────────────────────────┐
//! │        external pricing subsystem            │
//! └──────────────────────────────────────────────┘
//! ```

pub mod aggregator;
pub mod backend;
pub mod calculator;
pub mod generator;

pub use aggregator::AggregationError;
pub use backend::{EvaluationBackend, EvaluationError, LocalBackend, PartitionedBackend};
pub use calculator::{CalculationConfig, PvSeriesCalculator};
pub use generator::{ScenarioGenerator, DEFAULT_N_SCENARIOS, DEFAULT_SHIFT_RANGE_BP};
