//! Local bounded worker pool backend.

use super::{EvaluationBackend, EvaluationError};
use pvar_core::traits::Pricer;
use pvar_core::types::{Portfolio, PricingError, PvVector, ScenarioSet};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Evaluates scenarios on a dedicated rayon pool of a fixed size.
///
/// The degree of parallelism is exactly the configured thread count; a
/// single-threaded pool degrades to sequential evaluation without
/// deadlocking. Collecting into `Result` gives fail-fast semantics: one
/// captured pricing error fails the run and remaining work is abandoned.
#[derive(Clone, Copy, Debug)]
pub struct LocalBackend {
    n_threads: usize,
}

impl LocalBackend {
    /// Create a backend with an explicit worker count.
    ///
    /// # Panics
    ///
    /// Panics if `n_threads` is zero.
    pub fn new(n_threads: usize) -> Self {
        assert!(n_threads >= 1, "worker count must be at least 1");
        Self { n_threads }
    }

    /// Create a backend with one worker per available CPU.
    pub fn with_default_threads() -> Self {
        Self::new(num_cpus::get())
    }

    /// Get the configured worker count.
    pub fn n_threads(&self) -> usize {
        self.n_threads
    }
}

impl EvaluationBackend for LocalBackend {
    fn evaluate(
        &self,
        scenarios: &ScenarioSet,
        pricer: &dyn Pricer,
        portfolio: &Portfolio,
    ) -> Result<Vec<PvVector>, EvaluationError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.n_threads)
            .build()
            .map_err(|e| EvaluationError::WorkerPool(e.to_string()))?;

        let results: Result<Vec<PvVector>, PricingError> = pool.install(|| {
            scenarios
                .as_slice()
                .par_iter()
                .map(|scenario| pricer.price(scenario, portfolio))
                .collect()
        });

        Ok(results?)
    }
}
