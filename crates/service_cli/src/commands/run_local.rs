//! Local worker pool run.

use tracing::info;

use crate::pricing::{self, CurvePricer};
use crate::{CliError, Result};
use pvar_engine::{CalculationConfig, LocalBackend, PvSeriesCalculator};

/// Revalue a demo portfolio of `n_trades` trades over the configured
/// scenario set using a bounded pool of `n_threads` workers.
pub fn run(n_trades: usize, n_threads: usize, config: CalculationConfig) -> Result<()> {
    if n_threads < 1 {
        return Err(CliError::InvalidArgument(
            "thread count must be at least 1".to_string(),
        ));
    }

    println!(
        "Calculating PV for {} trades, {} scenarios using {} threads",
        n_trades, config.n_scenarios, n_threads
    );
    info!("Starting local run");

    let portfolio = pricing::build_portfolio(n_trades);
    let pricer = CurvePricer::default();
    let calculator = PvSeriesCalculator::new(config, LocalBackend::new(n_threads));

    super::report(calculator.calculate(&portfolio, &pricer))
}
