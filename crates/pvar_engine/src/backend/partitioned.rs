//! Partitioned shard fan-out backend.
//!
//! The cluster partition-map-reduce execution model expressed as scoped
//! worker threads plus message passing: scenarios are chunked into
//! `n_slices` shards, one worker prices each shard sequentially and sends
//! its results down a channel, and the receiving side merges shard outputs.
//! No cluster runtime is involved; a remote implementation would slot in
//! behind the same [`EvaluationBackend`] contract.

use super::{EvaluationBackend, EvaluationError};
use pvar_core::traits::Pricer;
use pvar_core::types::{Portfolio, PricingError, PvVector, ScenarioSet};
use std::sync::mpsc;
use std::thread;

/// Evaluates scenarios across a fixed number of shard workers.
#[derive(Clone, Copy, Debug)]
pub struct PartitionedBackend {
    n_slices: usize,
}

impl PartitionedBackend {
    /// Create a backend partitioning work into the given number of shards.
    ///
    /// # Panics
    ///
    /// Panics if `n_slices` is zero.
    pub fn new(n_slices: usize) -> Self {
        assert!(n_slices >= 1, "slice count must be at least 1");
        Self { n_slices }
    }

    /// Get the configured shard count.
    pub fn n_slices(&self) -> usize {
        self.n_slices
    }
}

impl EvaluationBackend for PartitionedBackend {
    fn evaluate(
        &self,
        scenarios: &ScenarioSet,
        pricer: &dyn Pricer,
        portfolio: &Portfolio,
    ) -> Result<Vec<PvVector>, EvaluationError> {
        if scenarios.is_empty() {
            return Ok(Vec::new());
        }

        // Never spawn more shards than there are scenarios.
        let n_slices = self.n_slices.min(scenarios.len());
        let shard_size = scenarios.len().div_ceil(n_slices);

        thread::scope(|scope| {
            let (tx, rx) = mpsc::channel();

            for shard in scenarios.as_slice().chunks(shard_size) {
                let tx = tx.clone();
                scope.spawn(move || {
                    let shard_result: Result<Vec<PvVector>, PricingError> = shard
                        .iter()
                        .map(|scenario| pricer.price(scenario, portfolio))
                        .collect();
                    // The receiver lives for the whole scope, so a send
                    // failure is unreachable; no reason to panic on it.
                    let _ = tx.send(shard_result);
                });
            }
            drop(tx);

            let mut merged = Vec::with_capacity(scenarios.len());
            let mut first_error: Option<PricingError> = None;
            for shard_result in rx {
                match shard_result {
                    Ok(vectors) => merged.extend(vectors),
                    Err(e) if first_error.is_none() => first_error = Some(e),
                    Err(_) => {}
                }
            }

            match first_error {
                Some(e) => Err(e.into()),
                None => Ok(merged),
            }
        })
    }
}
