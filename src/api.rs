//! JSON request handling for the HTTP endpoint
//!
//! Kept free of any runtime so the Lambda binary only does transport.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use crate::config::Settings;
use crate::error::{ApiError, ParameterError};
use crate::params::{InputParameters, ParameterBounds};
use crate::report::CurrencyFormat;
use crate::scenario::{MergedPoint, Scenario, ScenarioResult, ScenarioRunner};

/// One scenario as sent by the client; omitted fields take configured defaults
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioInput {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "initialPrincipal")]
    pub initial_principal: Option<f64>,

    #[serde(default, alias = "monthlyContribution")]
    pub monthly_contribution: Option<f64>,

    #[serde(default, alias = "interestRate")]
    pub annual_rate_pct: Option<f64>,

    #[serde(default)]
    pub years: Option<u32>,

    #[serde(default, alias = "inflationRate")]
    pub inflation_pct: Option<f64>,
}

impl ScenarioInput {
    fn resolve(&self, default_name: &str, defaults: &InputParameters) -> Scenario {
        let params = InputParameters {
            initial_principal: self.initial_principal.unwrap_or(defaults.initial_principal),
            monthly_contribution: self.monthly_contribution.unwrap_or(defaults.monthly_contribution),
            annual_rate_pct: self.annual_rate_pct.unwrap_or(defaults.annual_rate_pct),
            years: self.years.unwrap_or(defaults.years),
            inflation_pct: self.inflation_pct.unwrap_or(defaults.inflation_pct),
        };
        let name = self.name.clone().unwrap_or_else(|| default_name.to_string());
        Scenario::new(name, params)
    }
}

/// Input configuration for the projection
#[derive(Debug, Default, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub scenario_a: ScenarioInput,

    /// Present only in comparison mode
    #[serde(default)]
    pub scenario_b: Option<ScenarioInput>,

    /// Clamp out-of-range values instead of rejecting them
    #[serde(default)]
    pub clamp: bool,
}

/// Summary figures rendered for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySummary {
    pub final_balance: String,
    pub total_contributions: String,
    pub total_interest: String,
}

impl DisplaySummary {
    fn from_result(result: &ScenarioResult, format: &CurrencyFormat) -> Self {
        let summary = result.summary();
        Self {
            final_balance: format.format(summary.final_balance),
            total_contributions: format.format(summary.total_contributions),
            total_interest: format.format(summary.total_interest),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioOutput {
    #[serde(flatten)]
    pub result: ScenarioResult,
    pub display: DisplaySummary,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub scenario_a: ScenarioOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_b: Option<ScenarioOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged: Option<Vec<MergedPoint>>,
    pub execution_time_ms: u64,
}

/// Attribute a runner failure to the first scenario that fails validation
fn invalid_in(scenarios: &[&Scenario], source: ParameterError) -> ApiError {
    let scenario = scenarios
        .iter()
        .find(|s| s.params.validate().is_err())
        .or(scenarios.first())
        .map(|s| s.name.clone())
        .unwrap_or_default();
    ApiError::InvalidParameters { scenario, source }
}

/// Resolve, bound-check and project the scenarios of one request
pub fn handle_request(request: &ProjectionRequest, settings: &Settings) -> Result<ProjectionResponse, ApiError> {
    let start = Instant::now();
    let bounds = ParameterBounds::default();
    let runner = ScenarioRunner::new();
    let format = CurrencyFormat::default();

    let prepare = |input: &ScenarioInput, default_name: &str| -> Result<Scenario, ApiError> {
        let mut scenario = input.resolve(default_name, &settings.defaults);
        if request.clamp {
            scenario.params = bounds.clamp(&scenario.params);
        }
        bounds.check(&scenario.params).map_err(|source| ApiError::InvalidParameters {
            scenario: scenario.name.clone(),
            source,
        })?;
        Ok(scenario)
    };

    let scenario_a = prepare(&request.scenario_a, "A")?;
    let scenario_b = request
        .scenario_b
        .as_ref()
        .map(|input| prepare(input, "B"))
        .transpose()?;

    let (a, b, merged) = match &scenario_b {
        Some(b) => {
            let comparison = runner
                .compare(&scenario_a, b)
                .map_err(|source| invalid_in(&[&scenario_a, b], source))?;
            (comparison.a, Some(comparison.b), Some(comparison.merged))
        }
        None => (
            runner
                .run(&scenario_a)
                .map_err(|source| invalid_in(&[&scenario_a], source))?,
            None,
            None,
        ),
    };

    let output = |result: ScenarioResult| ScenarioOutput {
        display: DisplaySummary::from_result(&result, &format),
        result,
    };

    Ok(ProjectionResponse {
        scenario_a: output(a),
        scenario_b: b.map(output),
        merged,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Parse a JSON body (empty means all defaults) and handle it
pub fn handle_json(body: &str, settings: &Settings) -> Result<ProjectionResponse, ApiError> {
    let request: ProjectionRequest = if body.trim().is_empty() {
        ProjectionRequest::default()
    } else {
        serde_json::from_str(body)?
    };
    handle_request(&request, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let response = handle_json("", &Settings::default()).unwrap();
        assert_eq!(response.scenario_a.result.scenario.name, "A");
        assert_eq!(response.scenario_a.result.summary().final_balance, 319_144.0);
        assert_eq!(response.scenario_a.display.final_balance, "319.144\u{a0}US$");
        assert!(response.scenario_b.is_none());
        assert!(response.merged.is_none());
    }

    #[test]
    fn test_comparison_request() {
        let body = r#"{
            "scenario_a": {"name": "base", "years": 10},
            "scenario_b": {"interestRate": 10, "years": 10}
        }"#;
        let response = handle_json(body, &Settings::default()).unwrap();

        let b = response.scenario_b.as_ref().unwrap();
        assert_eq!(response.scenario_a.result.scenario.name, "base");
        assert_eq!(b.result.scenario.name, "B");
        assert_eq!(b.result.scenario.params.annual_rate_pct, 10.0);

        let merged = response.merged.as_ref().unwrap();
        assert_eq!(merged.len(), 11);
        assert_eq!(merged[10].balance_b, Some(b.result.summary().final_balance));
    }

    #[test]
    fn test_configured_defaults_fill_gaps() {
        let settings = Settings {
            defaults: InputParameters::new(1000.0, 0.0, 12.0, 1, 0.0),
        };
        let response = handle_json(r#"{"scenario_a": {}}"#, &settings).unwrap();
        assert_eq!(response.scenario_a.result.summary().final_balance, 1127.0);
    }

    #[test]
    fn test_out_of_range_rejected_or_clamped() {
        let body = r#"{"scenario_a": {"years": 150}}"#;
        let err = handle_json(body, &Settings::default()).unwrap_err();
        assert_eq!(err.status(), 400);
        match err {
            ApiError::InvalidParameters { scenario, source } => {
                assert_eq!(scenario, "A");
                assert_eq!(source, ParameterError::AboveMaximum { field: "years", max: 100.0 });
            }
            other => panic!("unexpected error: {other}"),
        }

        let body = r#"{"scenario_a": {"years": 150}, "clamp": true}"#;
        let response = handle_json(body, &Settings::default()).unwrap();
        assert_eq!(response.scenario_a.result.scenario.params.years, 100);
        assert_eq!(response.scenario_a.result.series().len(), 101);
    }

    #[test]
    fn test_runner_failure_names_the_failing_scenario() {
        let a = Scenario::reference_a();
        let b = Scenario::new("B", InputParameters::default().with_years(0));
        let err = ScenarioRunner::new().compare(&a, &b).unwrap_err();

        match invalid_in(&[&a, &b], err) {
            ApiError::InvalidParameters { scenario, source } => {
                assert_eq!(scenario, "B");
                assert_eq!(source, ParameterError::HorizonTooShort { years: 0, min: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = handle_json("{not json", &Settings::default()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_response_serializes() {
        let response = handle_json(r#"{"scenario_b": {}}"#, &Settings::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["scenario_a"]["projection"]["series"].is_array());
        assert_eq!(json["scenario_a"]["projection"]["summary"]["final_balance"], 319_144.0);
        assert!(json["scenario_b"]["display"]["final_balance"].is_string());
        assert_eq!(json["merged"][0]["balance_b"], 5000.0);
    }
}
