//! Scenario definitions for perturbed revaluation.
//!
//! A `Scenario` pairs an identifier with a parallel curve shift; a
//! `ScenarioSet` is the fixed, ordered collection of scenarios priced in
//! one risk run. Both are immutable once generated.

/// Basis points per unit rate.
pub const BP_PER_UNIT: f64 = 10_000.0;

/// A single market perturbation applied uniformly when revaluing a
/// portfolio.
///
/// The shift is a parallel curve shift expressed as a rate fraction
/// (basis points divided by 10,000). Scenario 0 is by convention the
/// unperturbed baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Position of this scenario within its set.
    id: usize,
    /// Parallel curve shift as a rate fraction.
    shift: f64,
}

impl Scenario {
    /// Create a scenario with a shift expressed as a rate fraction.
    pub fn new(id: usize, shift: f64) -> Self {
        Self { id, shift }
    }

    /// Create a scenario from a shift expressed in basis points.
    pub fn from_bp(id: usize, shift_bp: f64) -> Self {
        Self::new(id, shift_bp / BP_PER_UNIT)
    }

    /// Create the zero-shift baseline scenario.
    pub fn baseline(id: usize) -> Self {
        Self::new(id, 0.0)
    }

    /// Get the scenario identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the parallel shift as a rate fraction.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Get the parallel shift in basis points.
    pub fn shift_bp(&self) -> f64 {
        self.shift * BP_PER_UNIT
    }

    /// Check whether this is an unperturbed scenario.
    pub fn is_baseline(&self) -> bool {
        self.shift == 0.0
    }
}

/// An ordered, fixed-size collection of scenarios for one risk run.
///
/// Index 0 holds the baseline by convention. Completion order during
/// evaluation is irrelevant to correctness since aggregation is
/// commutative, but the set itself preserves generation order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Create a scenario set from a list of scenarios.
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Number of scenarios in the set.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Get a scenario by position.
    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    /// Iterate over the scenarios in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    /// View the scenarios as a slice.
    pub fn as_slice(&self) -> &[Scenario] {
        &self.scenarios
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_from_bp() {
        let scenario = Scenario::from_bp(3, -10.0);
        assert_eq!(scenario.id(), 3);
        assert_eq!(scenario.shift(), -0.001);
        assert_eq!(scenario.shift_bp(), -10.0);
    }

    #[test]
    fn test_scenario_baseline() {
        let scenario = Scenario::baseline(0);
        assert!(scenario.is_baseline());
        assert_eq!(scenario.shift(), 0.0);
    }

    #[test]
    fn test_scenario_set_preserves_order() {
        let set = ScenarioSet::new(vec![
            Scenario::baseline(0),
            Scenario::from_bp(1, 5.0),
            Scenario::from_bp(2, -5.0),
        ]);

        assert_eq!(set.len(), 3);
        assert!(set.get(0).unwrap().is_baseline());
        assert_eq!(set.get(2).unwrap().shift_bp(), -5.0);
        assert!(set.get(3).is_none());

        let ids: Vec<usize> = set.iter().map(Scenario::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_scenario_set_empty() {
        let set = ScenarioSet::new(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
