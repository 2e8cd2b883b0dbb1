//! Per-scenario summary rows for batch runs

use serde::Serialize;
use std::io::Write;
use crate::error::ParameterError;
use crate::scenario::{Scenario, ScenarioResult};

/// One line of the batch output file
#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    name: &'a str,
    initial_principal: String,
    monthly_contribution: String,
    annual_rate_pct: String,
    years: u32,
    inflation_pct: String,
    final_balance: String,
    total_contributions: String,
    total_interest: String,
}

impl<'a> BatchRow<'a> {
    fn new(scenario: &'a Scenario, result: &ScenarioResult) -> Self {
        let p = &scenario.params;
        let s = result.summary();
        Self {
            name: &scenario.name,
            initial_principal: format!("{:.2}", p.initial_principal),
            monthly_contribution: format!("{:.2}", p.monthly_contribution),
            annual_rate_pct: format!("{:.2}", p.annual_rate_pct),
            years: p.years,
            inflation_pct: format!("{:.2}", p.inflation_pct),
            final_balance: format!("{:.2}", s.final_balance),
            total_contributions: format!("{:.2}", s.total_contributions),
            total_interest: format!("{:.2}", s.total_interest),
        }
    }
}

/// Counts gathered while writing a batch summary
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchTotals {
    pub written: usize,
    pub failed: usize,
    pub sum_final_balance: f64,
}

/// Write one CSV row per successful scenario; failures are logged and skipped
pub fn write_batch_summary<W: Write>(
    writer: W,
    scenarios: &[Scenario],
    results: &[Result<ScenarioResult, ParameterError>],
) -> Result<BatchTotals, csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    let mut totals = BatchTotals::default();

    for (scenario, result) in scenarios.iter().zip(results) {
        match result {
            Ok(result) => {
                out.serialize(BatchRow::new(scenario, result))?;
                totals.written += 1;
                totals.sum_final_balance += result.summary().final_balance;
            }
            Err(e) => {
                log::error!("Scenario {} failed: {e}", scenario.name);
                totals.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{load_scenarios_from_reader, InputParameters};
    use crate::scenario::ScenarioRunner;

    #[test]
    fn test_names_with_commas_survive_round_trip() {
        let input = "\
name,initial_principal,monthly_contribution,annual_rate_pct,years,inflation_pct
\"growth, aggressive\",5000,500,10,20,0
baseline,5000,500,8,20,0
";
        let scenarios = load_scenarios_from_reader(input.as_bytes()).unwrap();
        let results = ScenarioRunner::new().run_batch(&scenarios);

        let mut buffer = Vec::new();
        let totals = write_batch_summary(&mut buffer, &scenarios, &results).unwrap();
        assert_eq!(totals.written, 2);
        assert_eq!(totals.failed, 0);
        assert_eq!(totals.sum_final_balance, 416_325.0 + 319_144.0);

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 9);
        assert_eq!(&headers[0], "name");
        assert_eq!(&headers[8], "total_interest");

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.len() == 9));
        assert_eq!(&records[0][0], "growth, aggressive");
        assert_eq!(&records[0][6], "416325.00");
        assert_eq!(&records[1][0], "baseline");
        assert_eq!(&records[1][4], "20");
    }

    #[test]
    fn test_failed_scenarios_are_skipped() {
        let scenarios = vec![
            Scenario::reference_a(),
            Scenario::new("bad", InputParameters::default().with_years(0)),
        ];
        let results = ScenarioRunner::new().run_batch(&scenarios);

        let mut buffer = Vec::new();
        let totals = write_batch_summary(&mut buffer, &scenarios, &results).unwrap();
        assert_eq!(totals.written, 1);
        assert_eq!(totals.failed, 1);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("bad"));
    }
}
