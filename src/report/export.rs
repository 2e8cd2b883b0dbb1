//! Comma-separated report of one or two projected scenarios
//!
//! Layout: a title block, one parameter block per scenario, then the yearly
//! detail with scenario B's balance as an extra column when comparing.

use chrono::{DateTime, NaiveDate, Utc};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use crate::params::InputParameters;
use crate::scenario::{merge_series, ScenarioResult};

/// Byte-order mark so spreadsheet tools pick up UTF-8
pub const UTF8_BOM: &str = "\u{feff}";

const TITLE: &str = "COMPOUND INTEREST REPORT";
const PARAMETER_HEADER: [&str; 5] = [
    "Initial Capital",
    "Monthly Contribution",
    "Annual Rate (%)",
    "Years",
    "Inflation (%)",
];

/// Two-decimal rendering used for every monetary and rate field
fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn parameter_row(params: &InputParameters) -> Vec<String> {
    vec![
        money(params.initial_principal),
        money(params.monthly_contribution),
        money(params.annual_rate_pct),
        params.years.to_string(),
        money(params.inflation_pct),
    ]
}

fn scenario_block(label: &str, result: &ScenarioResult) -> Vec<Vec<String>> {
    vec![
        vec![format!("SCENARIO {label}")],
        PARAMETER_HEADER.iter().map(|h| h.to_string()).collect(),
        parameter_row(&result.scenario.params),
        vec!["Final Balance".to_string(), money(result.summary().final_balance)],
        Vec::new(),
    ]
}

/// Build the report rows; `b` is present only in comparison mode
pub fn report_rows(a: &ScenarioResult, b: Option<&ScenarioResult>, generated_on: NaiveDate) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec![TITLE.to_string()],
        vec![format!("Generated on: {}", generated_on.format("%-d/%-m/%Y"))],
        Vec::new(),
    ];

    rows.extend(scenario_block("A", a));
    if let Some(b) = b {
        rows.extend(scenario_block("B", b));
    }

    rows.push(vec!["ANNUAL DETAIL".to_string()]);
    let mut header = vec![
        "Year".to_string(),
        "Scenario A - Balance".to_string(),
        "Scenario A - Principal".to_string(),
    ];
    if b.is_some() {
        header.push("Scenario B - Balance".to_string());
    }
    rows.push(header);

    let b_series = b.map(|b| b.series()).unwrap_or(&[]);
    for point in merge_series(a.series(), b_series) {
        let mut row = vec![
            point.year.to_string(),
            money(point.balance),
            money(point.total_principal),
        ];
        if b.is_some() {
            row.push(money(point.balance_b.unwrap_or(0.0)));
        }
        rows.push(row);
    }

    rows
}

/// Render the report as text, one comma-joined line per row
pub fn render_report(a: &ScenarioResult, b: Option<&ScenarioResult>, generated_on: NaiveDate) -> String {
    report_rows(a, b, generated_on)
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the report with a leading byte-order mark
pub fn write_report<W: Write>(
    writer: &mut W,
    a: &ScenarioResult,
    b: Option<&ScenarioResult>,
    generated_on: NaiveDate,
) -> io::Result<()> {
    writer.write_all(UTF8_BOM.as_bytes())?;
    writer.write_all(render_report(a, b, generated_on).as_bytes())?;
    writer.flush()
}

/// Write the report to a file, dated today
pub fn save_report<P: AsRef<Path>>(path: P, a: &ScenarioResult, b: Option<&ScenarioResult>) -> io::Result<()> {
    let mut file = File::create(path.as_ref())?;
    write_report(&mut file, a, b, Utc::now().date_naive())?;
    log::info!("Report written to {}", path.as_ref().display());
    Ok(())
}

/// Default download name: `projection_report_<unix millis>.csv`
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!("projection_report_{}.csv", now.timestamp_millis())
}
