//! Named scenarios, side-by-side comparison and batch runs
//!
//! Each scenario is projected independently, so comparisons and batches fan
//! out over rayon without any coordination between runs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::error::ParameterError;
use crate::params::InputParameters;
use crate::projection::{ProjectionEngine, ProjectionResult, Summary, YearPoint};

/// A named parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub params: InputParameters,
}

impl Scenario {
    pub fn new(name: impl Into<String>, params: InputParameters) -> Self {
        Self { name: name.into(), params }
    }

    /// Reference scenario "A": the default parameter set
    pub fn reference_a() -> Self {
        Self::new("A", InputParameters::default())
    }

    /// Reference scenario "B": the default parameter set at 10%
    pub fn reference_b() -> Self {
        Self::new("B", InputParameters::default().with_annual_rate_pct(10.0))
    }

    /// Copy of this scenario under another name, used to seed the second
    /// side when comparison mode is switched on
    pub fn duplicate_as(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.params)
    }
}

/// Projection of one named scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub projection: ProjectionResult,
}

impl ScenarioResult {
    pub fn summary(&self) -> &Summary {
        &self.projection.summary
    }

    pub fn series(&self) -> &[YearPoint] {
        &self.projection.series
    }
}

/// One year of the combined chart series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedPoint {
    pub year: u32,
    pub balance: f64,
    pub total_principal: f64,
    pub interest: f64,
    /// Scenario B balance at the same index, absent past the end of B's series
    pub balance_b: Option<f64>,
}

/// Two scenarios projected side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: ScenarioResult,
    pub b: ScenarioResult,
    pub merged: Vec<MergedPoint>,
}

impl Comparison {
    /// Difference in final balance, B minus A
    pub fn final_balance_gap(&self) -> f64 {
        self.b.summary().final_balance - self.a.summary().final_balance
    }
}

/// Merge two series by index for a shared chart
///
/// Scenario A drives the x-axis: the result always has A's length. B's
/// balance is attached where B has a point at the same index; extra B years
/// are dropped.
pub fn merge_series(a: &[YearPoint], b: &[YearPoint]) -> Vec<MergedPoint> {
    a.iter()
        .enumerate()
        .map(|(index, point)| MergedPoint {
            year: point.year,
            balance: point.balance,
            total_principal: point.total_principal,
            interest: point.interest,
            balance_b: b.get(index).map(|other| other.balance),
        })
        .collect()
}

/// Runs validated projections for scenarios
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Validate and project a single scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioResult, ParameterError> {
        let engine = ProjectionEngine::checked(scenario.params)?;
        Ok(ScenarioResult {
            scenario: scenario.clone(),
            projection: engine.project(),
        })
    }

    /// Project two scenarios in parallel and merge their series
    pub fn compare(&self, a: &Scenario, b: &Scenario) -> Result<Comparison, ParameterError> {
        let (result_a, result_b) = rayon::join(|| self.run(a), || self.run(b));
        let (a, b) = (result_a?, result_b?);
        let merged = merge_series(a.series(), b.series());

        log::debug!(
            "Compared '{}' ({} years) with '{}' ({} years)",
            a.scenario.name,
            a.scenario.params.years,
            b.scenario.name,
            b.scenario.params.years
        );

        Ok(Comparison { a, b, merged })
    }

    /// Project many scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<ScenarioResult, ParameterError>> {
        let results: Vec<_> = scenarios.par_iter().map(|scenario| self.run(scenario)).collect();
        log::info!("Projected batch of {} scenarios", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pair() {
        let a = Scenario::reference_a();
        let b = Scenario::reference_b();
        assert_eq!(a.params, InputParameters::default());
        assert_eq!(b.params.annual_rate_pct, 10.0);
        assert_eq!(b.params.years, a.params.years);
    }

    #[test]
    fn test_duplicate_seeds_second_scenario() {
        let a = Scenario::new("A", InputParameters::new(1000.0, 10.0, 4.0, 5, 1.0));
        let b = a.duplicate_as("B");
        assert_eq!(b.name, "B");
        assert_eq!(b.params, a.params);
    }

    #[test]
    fn test_compare_merges_by_year() {
        let runner = ScenarioRunner::new();
        let comparison = runner
            .compare(&Scenario::reference_a(), &Scenario::reference_b())
            .unwrap();

        assert_eq!(comparison.merged.len(), 21);
        for (i, point) in comparison.merged.iter().enumerate() {
            assert_eq!(point.year, comparison.a.series()[i].year);
            assert_eq!(point.year, comparison.b.series()[i].year);
            assert_eq!(point.balance_b, Some(comparison.b.series()[i].balance));
        }

        assert_eq!(comparison.a.summary().final_balance, 319_144.0);
        assert_eq!(comparison.b.summary().final_balance, 416_325.0);
        assert_eq!(comparison.final_balance_gap(), 416_325.0 - 319_144.0);
    }

    #[test]
    fn test_merge_with_shorter_and_longer_b() {
        let runner = ScenarioRunner::new();
        let a = runner.run(&Scenario::new("A", InputParameters::default().with_years(5))).unwrap();
        let short = runner.run(&Scenario::new("B", InputParameters::default().with_years(3))).unwrap();
        let long = runner.run(&Scenario::new("C", InputParameters::default().with_years(8))).unwrap();

        let merged = merge_series(a.series(), short.series());
        assert_eq!(merged.len(), 6);
        assert!(merged[3].balance_b.is_some());
        assert_eq!(merged[4].balance_b, None);
        assert_eq!(merged[5].balance_b, None);

        let merged = merge_series(a.series(), long.series());
        assert_eq!(merged.len(), 6);
        assert!(merged.iter().all(|p| p.balance_b.is_some()));
    }

    #[test]
    fn test_run_rejects_invalid_scenario() {
        let runner = ScenarioRunner::new();
        let bad = Scenario::new("bad", InputParameters::default().with_years(0));
        assert!(runner.run(&bad).is_err());
        assert!(runner.compare(&Scenario::reference_a(), &bad).is_err());
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = [3.0, 5.0, 7.0]
            .iter()
            .map(|&rate| Scenario::new(format!("rate-{rate}"), InputParameters::default().with_annual_rate_pct(rate)))
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 3);

        let finals: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().summary().final_balance)
            .collect();

        // Higher rate should result in higher final balance
        assert!(finals[0] < finals[1] && finals[1] < finals[2]);
        assert_eq!(results[1].as_ref().unwrap().scenario.name, "rate-5");
    }
}
