//! Partitioned shard run.

use tracing::info;

use crate::pricing::{self, CurvePricer};
use crate::{CliError, Result};
use pvar_engine::{CalculationConfig, PartitionedBackend, PvSeriesCalculator};

/// Revalue a demo portfolio of `n_trades` trades over the configured
/// scenario set, partitioned into `n_slices` shard workers.
pub fn run(n_trades: usize, n_slices: usize, config: CalculationConfig) -> Result<()> {
    if n_slices < 1 {
        return Err(CliError::InvalidArgument(
            "slice count must be at least 1".to_string(),
        ));
    }

    println!(
        "Calculating PV for {} trades, {} scenarios using {} slices",
        n_trades, config.n_scenarios, n_slices
    );
    info!("Starting sharded run");

    let portfolio = pricing::build_portfolio(n_trades);
    let pricer = CurvePricer::default();
    let calculator = PvSeriesCalculator::new(config, PartitionedBackend::new(n_slices));

    super::report(calculator.calculate(&portfolio, &pricer))
}
