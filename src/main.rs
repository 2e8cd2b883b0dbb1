//! Investment Projection CLI
//!
//! Command-line interface for running one projection or comparing two

use anyhow::{Context, Result};
use clap::Parser;
use chrono::Utc;
use investment_projection::{
    params::ParameterBounds,
    projection::purchasing_power,
    report::{report_file_name, save_report, CurrencyFormat},
    scenario::{ScenarioResult, ScenarioRunner},
    InputParameters, Scenario, Settings,
};

/// Project an investment year by year, optionally against a second scenario
#[derive(Parser, Debug)]
#[command(name = "investment_projection", version, about, long_about = None)]
struct Cli {
    /// Initial capital
    #[arg(long)]
    principal: Option<f64>,

    /// Deposit added at the end of each month
    #[arg(long)]
    monthly: Option<f64>,

    /// Nominal annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Investment horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Annual inflation rate in percent
    #[arg(long)]
    inflation: Option<f64>,

    /// Compare against a second scenario (starts as a copy of the first)
    #[arg(long)]
    compare: bool,

    /// Scenario B initial capital
    #[arg(long, requires = "compare")]
    principal_b: Option<f64>,

    /// Scenario B monthly deposit
    #[arg(long, requires = "compare")]
    monthly_b: Option<f64>,

    /// Scenario B annual interest rate in percent
    #[arg(long, requires = "compare")]
    rate_b: Option<f64>,

    /// Scenario B horizon in years
    #[arg(long, requires = "compare")]
    years_b: Option<u32>,

    /// Scenario B annual inflation rate in percent
    #[arg(long, requires = "compare")]
    inflation_b: Option<f64>,

    /// Clamp out-of-range values instead of rejecting them
    #[arg(long)]
    clamp: bool,

    /// Write the CSV report, to this path or to a timestamped file name
    #[arg(long, value_name = "PATH")]
    csv: Option<Option<String>>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Show amounts as US dollars in US English style ($125,000)
    #[arg(long)]
    us_format: bool,
}

impl Cli {
    fn scenario_a(&self, defaults: &InputParameters) -> Scenario {
        let params = InputParameters {
            initial_principal: self.principal.unwrap_or(defaults.initial_principal),
            monthly_contribution: self.monthly.unwrap_or(defaults.monthly_contribution),
            annual_rate_pct: self.rate.unwrap_or(defaults.annual_rate_pct),
            years: self.years.unwrap_or(defaults.years),
            inflation_pct: self.inflation.unwrap_or(defaults.inflation_pct),
        };
        Scenario::new("A", params)
    }

    fn scenario_b(&self, a: &Scenario) -> Scenario {
        let mut b = a.duplicate_as("B");
        let p = &mut b.params;
        p.initial_principal = self.principal_b.unwrap_or(p.initial_principal);
        p.monthly_contribution = self.monthly_b.unwrap_or(p.monthly_contribution);
        p.annual_rate_pct = self.rate_b.unwrap_or(p.annual_rate_pct);
        p.years = self.years_b.unwrap_or(p.years);
        p.inflation_pct = self.inflation_b.unwrap_or(p.inflation_pct);
        b
    }
}

fn prepare(scenario: Scenario, bounds: &ParameterBounds, clamp: bool) -> Result<Scenario> {
    let mut scenario = scenario;
    if clamp {
        scenario.params = bounds.clamp(&scenario.params);
    }
    bounds
        .check(&scenario.params)
        .with_context(|| format!("scenario {}", scenario.name))?;
    Ok(scenario)
}

/// Marker for values past the usual slider range
fn beyond(exceeds: bool) -> &'static str {
    if exceeds { " (above typical range)" } else { "" }
}

fn print_scenario(result: &ScenarioResult, bounds: &ParameterBounds, format: &CurrencyFormat) {
    let p = &result.scenario.params;
    println!("Scenario {}:", result.scenario.name);
    println!("  Initial capital:      {}{}", format.format(p.initial_principal),
        beyond(bounds.initial_principal.exceeds_slider(p.initial_principal)));
    println!("  Monthly contribution: {}{}", format.format(p.monthly_contribution),
        beyond(bounds.monthly_contribution.exceeds_slider(p.monthly_contribution)));
    println!("  Annual rate:          {:.2}%{}", p.annual_rate_pct,
        beyond(bounds.annual_rate_pct.exceeds_slider(p.annual_rate_pct)));
    println!("  Years:                {}{}", p.years,
        beyond(bounds.years.exceeds_slider(p.years as f64)));
    println!("  Inflation:            {:.2}%{}", p.inflation_pct,
        beyond(bounds.inflation_pct.exceeds_slider(p.inflation_pct)));
    if p.inflation_pct > 0.0 {
        println!(
            "  At {:.1}% inflation, {} today buys about {} in {} years",
            p.inflation_pct,
            format.format(10_000.0),
            format.format(purchasing_power(10_000.0, p.inflation_pct, p.years)),
            p.years
        );
    }
    println!();
}

fn print_summary(result: &ScenarioResult, format: &CurrencyFormat) {
    let summary = result.summary();
    println!("\nSummary ({}):", result.scenario.name);
    println!("  Final balance:        {}", format.format(summary.final_balance));
    println!("  Total contributions:  {}", format.format(summary.total_contributions));
    println!("  Total interest:       {}", format.format(summary.total_interest));
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let bounds = ParameterBounds::default();
    let runner = ScenarioRunner::new();
    let format = if cli.us_format {
        CurrencyFormat::en_us_usd()
    } else {
        CurrencyFormat::default()
    };

    let scenario_a = prepare(cli.scenario_a(&settings.defaults), &bounds, cli.clamp)?;
    let scenario_b = if cli.compare {
        Some(prepare(cli.scenario_b(&scenario_a), &bounds, cli.clamp)?)
    } else {
        None
    };

    let (result_a, result_b, merged, gap) = match &scenario_b {
        Some(b) => {
            let comparison = runner.compare(&scenario_a, b)?;
            let gap = comparison.final_balance_gap();
            (comparison.a, Some(comparison.b), Some(comparison.merged), Some(gap))
        }
        None => (runner.run(&scenario_a)?, None, None, None),
    };

    if cli.json {
        let output = serde_json::json!({
            "scenario_a": &result_a,
            "scenario_b": &result_b,
            "merged": &merged,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_scenario(&result_a, &bounds, &format);
        if let Some(b) = &result_b {
            print_scenario(b, &bounds, &format);
        }

        // Print header
        match &merged {
            Some(_) => println!("{:>4} {:>18} {:>18} {:>18} {:>18}", "Year", "Balance A", "Principal A", "Interest A", "Balance B"),
            None => println!("{:>4} {:>18} {:>18} {:>18}", "Year", "Balance", "Principal", "Interest"),
        }
        println!("{}", "-".repeat(if merged.is_some() { 80 } else { 61 }));

        match &merged {
            Some(points) => {
                for point in points {
                    let balance_b = point.balance_b.map(|v| format.format(v)).unwrap_or_default();
                    println!("{:>4} {:>18} {:>18} {:>18} {:>18}",
                        point.year,
                        format.format(point.balance),
                        format.format(point.total_principal),
                        format.format(point.interest),
                        balance_b,
                    );
                }
            }
            None => {
                for point in result_a.series() {
                    println!("{:>4} {:>18} {:>18} {:>18}",
                        point.year,
                        format.format(point.balance),
                        format.format(point.total_principal),
                        format.format(point.interest),
                    );
                }
            }
        }

        print_summary(&result_a, &format);
        if let Some(b) = &result_b {
            print_summary(b, &format);
        }
        if let Some(gap) = gap {
            println!("\nDifference in final balance (B - A): {}", format.format(gap));
        }
    }

    if let Some(path) = &cli.csv {
        let path = path.clone().unwrap_or_else(|| report_file_name(Utc::now()));
        save_report(&path, &result_a, result_b.as_ref())
            .with_context(|| format!("writing report to {path}"))?;
        println!("\nFull results written to: {path}");
    }

    Ok(())
}
