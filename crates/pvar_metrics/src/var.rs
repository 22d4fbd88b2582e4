//! Order-statistic VaR and Expected Shortfall.

use crate::error::MetricsError;

/// VaR and Expected Shortfall over an immutable descending-sorted loss
/// series.
///
/// Losses are signed so that larger means worse; the series is sorted
/// worst-first at construction and never mutated afterwards. Scenario ids
/// are 1-indexed and may be fractional, in which case values are linearly
/// interpolated between the two adjacent order statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct VarCalculator {
    /// Losses sorted in descending order, worst first.
    sorted_losses: Vec<f64>,
}

impl VarCalculator {
    /// Build a calculator from an unordered series of losses.
    ///
    /// The series is sorted descending (worst loss first). An empty series
    /// is rejected: no valid scenario would exist.
    pub fn from_losses(mut losses: Vec<f64>) -> Result<Self, MetricsError> {
        if losses.is_empty() {
            return Err(MetricsError::EmptySeries);
        }
        losses.sort_by(|a, b| b.total_cmp(a));
        Ok(Self {
            sorted_losses: losses,
        })
    }

    /// Number of losses in the series.
    pub fn len(&self) -> usize {
        self.sorted_losses.len()
    }

    /// Whether the series is empty; construction forbids it, so this is
    /// always false.
    pub fn is_empty(&self) -> bool {
        self.sorted_losses.is_empty()
    }

    /// View the descending-sorted series.
    pub fn sorted_losses(&self) -> &[f64] {
        &self.sorted_losses
    }

    /// Map a confidence level to a (possibly fractional) 1-indexed
    /// scenario id: `len * (1 - confidence_level)`.
    ///
    /// Strictly decreasing in the confidence level for a fixed series.
    /// Fails once the id drops below 1 — the series has too few tail
    /// scenarios to resolve that confidence level.
    pub fn scenario_from_confidence_level(
        &self,
        confidence_level: f64,
    ) -> Result<f64, MetricsError> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(MetricsError::InvalidConfidenceLevel(confidence_level));
        }
        let scenario_id = self.len() as f64 * (1.0 - confidence_level);
        if scenario_id < 1.0 {
            return Err(MetricsError::InsufficientScenarios {
                len: self.len(),
                confidence_level,
            });
        }
        Ok(scenario_id)
    }

    /// VaR at a 1-indexed, possibly fractional scenario id in `[1, len]`.
    ///
    /// For scenario 3.75 the loss is `0.25 * series[2] + 0.75 * series[3]`;
    /// an exact integer id degenerates to the entry itself with no
    /// interpolation.
    pub fn var_at_scenario(&self, scenario: f64) -> Result<f64, MetricsError> {
        if !(scenario >= 1.0 && scenario <= self.len() as f64) {
            return Err(MetricsError::ScenarioOutOfRange {
                len: self.len(),
                scenario,
            });
        }
        // 1-indexed scenario id to 0-indexed position.
        let loss_index = scenario - 1.0;
        let lower_index = loss_index.floor() as usize;
        let upper_index = loss_index.ceil() as usize;
        let upper_weight = loss_index - loss_index.floor();
        let lower_weight = 1.0 - upper_weight;
        Ok(self.sorted_losses[lower_index] * lower_weight
            + self.sorted_losses[upper_index] * upper_weight)
    }

    /// VaR at a confidence level, optionally rounding the derived scenario
    /// id to the nearest whole scenario (half rounds up) first.
    pub fn var_at_confidence_level(
        &self,
        confidence_level: f64,
        round_to_nearest_whole_scenario: bool,
    ) -> Result<f64, MetricsError> {
        let scenario = self.scenario_from_confidence_level(confidence_level)?;
        let scenario = if round_to_nearest_whole_scenario {
            scenario.round()
        } else {
            scenario
        };
        self.var_at_scenario(scenario)
    }

    /// The worst `n` losses, worst first, as a fresh copy.
    pub fn worst_n_losses(&self, losses: usize) -> Result<Vec<f64>, MetricsError> {
        if losses < 1 || losses > self.len() {
            return Err(MetricsError::LossCountOutOfRange {
                len: self.len(),
                losses: losses as f64,
            });
        }
        Ok(self.sorted_losses[..losses].to_vec())
    }

    /// Expected Shortfall over the worst `losses_to_average` losses, which
    /// may be fractional.
    ///
    /// A partial scenario is weighted by its fractional part: for 3.75 the
    /// result is `(1st + 2nd + 3rd + 0.75 * 4th) / 3.75`. The divisor is
    /// the fractional count itself, not the number of terms.
    pub fn expected_shortfall_of_losses(
        &self,
        losses_to_average: f64,
    ) -> Result<f64, MetricsError> {
        if !(losses_to_average >= 1.0 && losses_to_average <= self.len() as f64) {
            return Err(MetricsError::LossCountOutOfRange {
                len: self.len(),
                losses: losses_to_average,
            });
        }
        let loss_index = losses_to_average - 1.0;
        let lower_index = loss_index.floor() as usize;
        let upper_index = loss_index.ceil() as usize;

        let mut losses: f64 = self.sorted_losses[..=lower_index].iter().sum();
        if lower_index != upper_index {
            let weight = loss_index - loss_index.floor();
            losses += weight * self.sorted_losses[upper_index];
        }
        Ok(losses / losses_to_average)
    }

    /// Expected Shortfall at a confidence level, optionally rounding the
    /// derived loss count to the nearest whole loss (half rounds up) first.
    pub fn expected_shortfall_at_confidence_level(
        &self,
        confidence_level: f64,
        round_to_nearest_loss: bool,
    ) -> Result<f64, MetricsError> {
        let scenario = self.scenario_from_confidence_level(confidence_level)?;
        let scenario = if round_to_nearest_loss {
            scenario.round()
        } else {
            scenario
        };
        self.expected_shortfall_of_losses(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn calculator() -> VarCalculator {
        // Deliberately unsorted input; construction sorts worst-first.
        VarCalculator::from_losses(vec![30.0, 10.0, 50.0, 20.0, 40.0]).unwrap()
    }

    #[test]
    fn test_construction_sorts_descending() {
        let calc = calculator();
        assert_eq!(calc.sorted_losses(), &[50.0, 40.0, 30.0, 20.0, 10.0]);
        assert_eq!(calc.len(), 5);
        assert!(!calc.is_empty());
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = VarCalculator::from_losses(Vec::new()).unwrap_err();
        assert_eq!(err, MetricsError::EmptySeries);
    }

    #[test]
    fn test_var_at_whole_scenarios() {
        let calc = calculator();
        assert_eq!(calc.var_at_scenario(1.0).unwrap(), 50.0);
        assert_eq!(calc.var_at_scenario(3.0).unwrap(), 30.0);
        assert_eq!(calc.var_at_scenario(5.0).unwrap(), 10.0);
    }

    #[test]
    fn test_var_interpolates_between_scenarios() {
        let calc = calculator();
        // Midpoint of the 2nd (40) and 3rd (30) worst losses.
        assert_abs_diff_eq!(calc.var_at_scenario(2.5).unwrap(), 35.0);
        // 0.25 * 3rd + 0.75 * 4th.
        assert_abs_diff_eq!(calc.var_at_scenario(3.75).unwrap(), 22.5);
    }

    #[test]
    fn test_var_rejects_out_of_range_scenarios() {
        let calc = calculator();
        for scenario in [0.0, 0.99, 5.01, -1.0, f64::NAN] {
            let err = calc.var_at_scenario(scenario).unwrap_err();
            assert!(matches!(err, MetricsError::ScenarioOutOfRange { .. }));
        }
    }

    #[test]
    fn test_scenario_from_confidence_level() {
        let calc = calculator();
        assert_abs_diff_eq!(
            calc.scenario_from_confidence_level(0.8).unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            calc.scenario_from_confidence_level(0.5).unwrap(),
            2.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_scenario_strictly_decreasing_in_confidence() {
        let calc = calculator();
        let lower = calc.scenario_from_confidence_level(0.5).unwrap();
        let higher = calc.scenario_from_confidence_level(0.7).unwrap();
        assert!(higher < lower);
    }

    #[test]
    fn test_confidence_level_bounds_rejected() {
        let calc = calculator();
        for confidence_level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = calc
                .scenario_from_confidence_level(confidence_level)
                .unwrap_err();
            assert!(matches!(err, MetricsError::InvalidConfidenceLevel(_)));
        }
    }

    #[test]
    fn test_insufficient_scenarios_near_one() {
        // 5 * (1 - 0.9) = 0.5 < 1: the tail cannot be resolved.
        let err = calculator().scenario_from_confidence_level(0.9).unwrap_err();
        assert!(matches!(err, MetricsError::InsufficientScenarios { .. }));
    }

    #[test]
    fn test_var_at_confidence_level_rounding() {
        let calc = calculator();
        // Scenario id 5 * (1 - 0.5) = 2.5; rounded half-up to 3.
        assert_abs_diff_eq!(calc.var_at_confidence_level(0.5, false).unwrap(), 35.0);
        assert_eq!(calc.var_at_confidence_level(0.5, true).unwrap(), 30.0);
    }

    #[test]
    fn test_worst_n_losses_returns_copy() {
        let calc = calculator();
        assert_eq!(calc.worst_n_losses(3).unwrap(), vec![50.0, 40.0, 30.0]);
        assert_eq!(calc.worst_n_losses(1).unwrap(), vec![50.0]);
        assert_eq!(calc.worst_n_losses(5).unwrap().len(), 5);
    }

    #[test]
    fn test_worst_n_losses_range_rejected() {
        let calc = calculator();
        for n in [0, 6] {
            let err = calc.worst_n_losses(n).unwrap_err();
            assert!(matches!(err, MetricsError::LossCountOutOfRange { .. }));
        }
    }

    #[test]
    fn test_expected_shortfall_fractional_weighting() {
        let calc = calculator();
        // (50 + 40 + 30 + 0.75 * 20) / 3.75 = 38.0
        assert_abs_diff_eq!(
            calc.expected_shortfall_of_losses(3.75).unwrap(),
            38.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_expected_shortfall_whole_count_is_plain_mean() {
        let calc = calculator();
        assert_abs_diff_eq!(
            calc.expected_shortfall_of_losses(3.0).unwrap(),
            40.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(calc.expected_shortfall_of_losses(1.0).unwrap(), 50.0);
    }

    #[test]
    fn test_expected_shortfall_range_rejected() {
        let calc = calculator();
        for losses in [0.5, 5.5, f64::NAN] {
            let err = calc.expected_shortfall_of_losses(losses).unwrap_err();
            assert!(matches!(err, MetricsError::LossCountOutOfRange { .. }));
        }
    }

    #[test]
    fn test_expected_shortfall_at_confidence_level() {
        let calc = calculator();
        // Scenario id 2.5: (50 + 40 + 0.5 * 30) / 2.5 = 42.0
        assert_abs_diff_eq!(
            calc.expected_shortfall_at_confidence_level(0.5, false)
                .unwrap(),
            42.0,
            epsilon = 1e-12
        );
        // Rounded to 3: (50 + 40 + 30) / 3 = 40.0
        assert_abs_diff_eq!(
            calc.expected_shortfall_at_confidence_level(0.5, true)
                .unwrap(),
            40.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_loss_series() {
        let calc = VarCalculator::from_losses(vec![12.5]).unwrap();
        assert_eq!(calc.var_at_scenario(1.0).unwrap(), 12.5);
        assert_eq!(calc.expected_shortfall_of_losses(1.0).unwrap(), 12.5);
        assert_eq!(calc.worst_n_losses(1).unwrap(), vec![12.5]);
    }
}
