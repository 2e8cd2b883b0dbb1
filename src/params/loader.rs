//! Load named scenarios from a CSV file
//!
//! Expected header:
//! `name,initial_principal,monthly_contribution,annual_rate_pct,years,inflation_pct`
//! (`inflation_pct` may be left empty or omitted, meaning 0).
//! Rows are held to the same field bounds as interactive input.

use csv::Reader;
use std::path::Path;
use crate::error::LoadError;
use crate::scenario::Scenario;
use super::{InputParameters, ParameterBounds};

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    initial_principal: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    years: u32,
    #[serde(default)]
    inflation_pct: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, row: usize) -> Result<Scenario, LoadError> {
        let params = InputParameters::new(
            self.initial_principal,
            self.monthly_contribution,
            self.annual_rate_pct,
            self.years,
            self.inflation_pct.unwrap_or(0.0),
        );

        params
            .validate()
            .and_then(|()| ParameterBounds::default().check(&params))
            .map_err(|source| LoadError::InvalidRow {
                row,
                name: self.name.clone(),
                source,
            })?;

        Ok(Scenario::new(self.name, params))
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, LoadError> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(index + 1)?);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
