//! Command implementations.

pub mod run_local;
pub mod run_sharded;

use crate::{CliError, Result};
use pvar_core::types::PvVector;
use pvar_engine::EvaluationError;

/// Report a run outcome on stdout and map it to the CLI result.
///
/// Success prints the aggregate size; failure prints the first error's
/// message and converts it into a non-zero exit.
pub(crate) fn report(result: std::result::Result<PvVector, EvaluationError>) -> Result<()> {
    match result {
        Ok(aggregate) => {
            println!("Results size = {}", aggregate.len());
            Ok(())
        }
        Err(e) => {
            println!("Calculation failed: {}", e);
            Err(CliError::CalculationFailed(e.to_string()))
        }
    }
}
