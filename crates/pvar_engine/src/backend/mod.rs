//! Evaluation backends: interchangeable strategies for mapping a scenario
//! set through a pricer.
//!
//! Both strategies satisfy the same contract — every scenario is priced
//! exactly once, the result order is unspecified, and the first pricing
//! failure fails the whole batch. Callers that need a deterministic
//! outcome rely on the aggregation combinator being commutative rather
//! than on completion order.

mod local;
mod partitioned;

pub use local::LocalBackend;
pub use partitioned::PartitionedBackend;

use crate::aggregator::AggregationError;
use pvar_core::traits::Pricer;
use pvar_core::types::{Portfolio, PricingError, PvVector, ScenarioSet};
use thiserror::Error;

/// Errors from a scenario evaluation run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// A scenario could not be priced; carries the first failure observed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The per-scenario results could not be aggregated.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// The worker pool could not be constructed.
    #[error("Worker pool construction failed: {0}")]
    WorkerPool(String),

    /// The run configuration was rejected before any work started.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// An execution strategy mapping scenarios to per-scenario PV vectors.
///
/// Implementations fan the pricer out over the scenario set; the pricer
/// and portfolio are shared read-only across workers. Failure semantics
/// are fail-fast: at least the first error is captured and returned,
/// outstanding work may be abandoned and later errors are dropped.
pub trait EvaluationBackend {
    /// Price every scenario in the set, in no particular result order.
    fn evaluate(
        &self,
        scenarios: &ScenarioSet,
        pricer: &dyn Pricer,
        portfolio: &Portfolio,
    ) -> Result<Vec<PvVector>, EvaluationError>;
}
