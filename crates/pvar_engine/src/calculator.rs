//! End-to-end PV series calculation.
//!
//! Ties the generator, an evaluation backend and the aggregator together
//! behind one call. Configuration is an explicit value constructed by the
//! caller and passed in — there is no process-wide state.

use crate::aggregator;
use crate::backend::{EvaluationBackend, EvaluationError};
use crate::generator::{ScenarioGenerator, DEFAULT_N_SCENARIOS, DEFAULT_SHIFT_RANGE_BP};
use pvar_core::traits::Pricer;
use pvar_core::types::{Portfolio, PvVector, ScenarioSet};
use pvar_core::Stopwatch;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for one PV series run.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationConfig {
    /// Number of scenarios, baseline included.
    pub n_scenarios: usize,
    /// Width of the random shift range in basis points.
    pub shift_range_bp: f64,
    /// Seed for reproducible scenario generation; entropy-based if unset.
    pub seed: Option<u64>,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            n_scenarios: DEFAULT_N_SCENARIOS,
            shift_range_bp: DEFAULT_SHIFT_RANGE_BP,
            seed: None,
        }
    }
}

impl CalculationConfig {
    /// Create a configuration with the default scenario count and range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scenario count.
    pub fn with_scenarios(mut self, n_scenarios: usize) -> Self {
        self.n_scenarios = n_scenarios;
        self
    }

    /// Set the shift range width in basis points.
    pub fn with_shift_range_bp(mut self, shift_range_bp: f64) -> Self {
        self.shift_range_bp = shift_range_bp;
        self
    }

    /// Set a fixed seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Computes the aggregate PV vector for a portfolio over a scenario set.
///
/// Generic over the evaluation backend so local and partitioned runs share
/// one orchestration path.
#[derive(Clone, Debug)]
pub struct PvSeriesCalculator<B> {
    config: CalculationConfig,
    backend: B,
}

impl<B: EvaluationBackend> PvSeriesCalculator<B> {
    /// Create a calculator from a configuration and a backend.
    pub fn new(config: CalculationConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Generate the scenario set for this configuration.
    ///
    /// Scenario generation happens before fan-out, so no randomness is
    /// consumed concurrently during evaluation. A non-positive shift range
    /// is a configuration error, not a panic: the value can arrive straight
    /// from a command-line flag.
    pub fn scenarios(&self) -> Result<ScenarioSet, EvaluationError> {
        if !(self.config.shift_range_bp > 0.0) {
            return Err(EvaluationError::InvalidConfiguration(format!(
                "shift range must be strictly positive, got: {}",
                self.config.shift_range_bp
            )));
        }
        let generator = ScenarioGenerator::new(self.config.shift_range_bp);
        Ok(match self.config.seed {
            Some(seed) => {
                generator.generate_with(self.config.n_scenarios, &mut StdRng::seed_from_u64(seed))
            }
            None => generator.generate(self.config.n_scenarios),
        })
    }

    /// Run the full computation: generate scenarios, evaluate them through
    /// the backend, and reduce the results to one aggregate PV vector.
    ///
    /// The evaluation and reduction are wrapped in a stopwatch whose
    /// elapsed-time report fires on success and failure alike.
    pub fn calculate(
        &self,
        portfolio: &Portfolio,
        pricer: &dyn Pricer,
    ) -> Result<PvVector, EvaluationError> {
        let scenarios = self.scenarios()?;
        Stopwatch::time("Calculations took", || {
            let vectors = self.backend.evaluate(&scenarios, pricer, portfolio)?;
            Ok(aggregator::reduce(vectors)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{failing_pricer, shift_pricer};
    use crate::backend::{LocalBackend, PartitionedBackend};
    use approx::assert_abs_diff_eq;
    use pvar_core::types::Scenario;

    fn config() -> CalculationConfig {
        CalculationConfig::new().with_scenarios(4).with_seed(17)
    }

    #[test]
    fn test_aggregate_equals_sum_of_shifts() {
        let calculator = PvSeriesCalculator::new(config(), LocalBackend::new(2));
        let expected: f64 = calculator
            .scenarios()
            .unwrap()
            .iter()
            .map(Scenario::shift)
            .sum();

        let aggregate = calculator
            .calculate(&Portfolio::default(), &shift_pricer)
            .unwrap();

        assert_eq!(aggregate, vec![expected]);
    }

    #[test]
    fn test_backends_agree() {
        let local = PvSeriesCalculator::new(config(), LocalBackend::new(2));
        let partitioned = PvSeriesCalculator::new(config(), PartitionedBackend::new(2));

        let a = local.calculate(&Portfolio::default(), &shift_pricer).unwrap();
        let b = partitioned
            .calculate(&Portfolio::default(), &shift_pricer)
            .unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_baseline_contributes_zero() {
        let one_scenario = CalculationConfig::new().with_scenarios(1).with_seed(17);
        let calculator = PvSeriesCalculator::new(one_scenario, LocalBackend::new(1));

        let aggregate = calculator
            .calculate(&Portfolio::default(), &shift_pricer)
            .unwrap();
        assert_eq!(aggregate, vec![0.0]);
    }

    #[test]
    fn test_failure_propagates_through_calculate() {
        let calculator = PvSeriesCalculator::new(config(), LocalBackend::new(2));
        let pricer = failing_pricer(2);

        let err = calculator
            .calculate(&Portfolio::default(), &pricer)
            .unwrap_err();
        assert_eq!(format!("{}", err), "Pricing failed: scenario 2 unpriceable");
    }

    #[test]
    fn test_zero_scenarios_is_empty_input() {
        let empty = CalculationConfig::new().with_scenarios(0).with_seed(17);
        let calculator = PvSeriesCalculator::new(empty, LocalBackend::new(1));

        let err = calculator
            .calculate(&Portfolio::default(), &shift_pricer)
            .unwrap_err();
        assert_eq!(
            format!("{}", err),
            "No PV vectors to aggregate"
        );
    }

    #[test]
    fn test_non_positive_shift_range_is_typed_error() {
        // The range can come straight from a CLI flag, so it must surface
        // as a failed Result rather than aborting the process.
        for shift_range_bp in [0.0, -5.0, f64::NAN] {
            let bad = CalculationConfig::new()
                .with_scenarios(4)
                .with_shift_range_bp(shift_range_bp)
                .with_seed(17);
            let calculator = PvSeriesCalculator::new(bad, LocalBackend::new(1));

            let err = calculator
                .calculate(&Portfolio::default(), &shift_pricer)
                .unwrap_err();
            assert!(matches!(err, EvaluationError::InvalidConfiguration(_)));
            assert!(format!("{}", err).contains("shift range must be strictly positive"));
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let calculator = PvSeriesCalculator::new(config(), LocalBackend::new(2));

        let a = calculator
            .calculate(&Portfolio::default(), &shift_pricer)
            .unwrap();
        let b = calculator
            .calculate(&Portfolio::default(), &shift_pricer)
            .unwrap();
        assert_eq!(a, b);
    }
}
