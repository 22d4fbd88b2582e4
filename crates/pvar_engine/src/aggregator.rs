//! Elementwise aggregation of per-scenario PV vectors.
//!
//! The reduction combinator is elementwise addition, which is commutative
//! and associative up to floating-point rounding: parallel backends may
//! deliver vectors in any order, and the least significant bits of the
//! aggregate may differ between summation orders. That nondeterminism is
//! accepted, not a defect.

use pvar_core::types::PvVector;
use thiserror::Error;

/// Errors from PV vector aggregation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    /// Two vectors being combined differ in length.
    #[error("Vectors cannot be added as they differ in length: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the accumulator.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },

    /// No vectors were supplied; an aggregate over zero scenarios is
    /// meaningless.
    #[error("No PV vectors to aggregate")]
    EmptyInput,
}

/// Add `other` into `acc` elementwise.
pub fn add_assign(acc: &mut PvVector, other: &[f64]) -> Result<(), AggregationError> {
    if acc.len() != other.len() {
        return Err(AggregationError::DimensionMismatch {
            expected: acc.len(),
            actual: other.len(),
        });
    }
    for (a, b) in acc.iter_mut().zip(other) {
        *a += b;
    }
    Ok(())
}

/// Reduce a sequence of PV vectors into their elementwise sum.
///
/// Left fold starting from the first vector. Accepts any iterator so
/// backends can stream vectors through without materialising them first;
/// dimension mismatches fail at the first offending vector.
pub fn reduce(vectors: impl IntoIterator<Item = PvVector>) -> Result<PvVector, AggregationError> {
    let mut iter = vectors.into_iter();
    let mut acc = iter.next().ok_or(AggregationError::EmptyInput)?;
    for vector in iter {
        add_assign(&mut acc, &vector)?;
    }
    Ok(acc)
}
