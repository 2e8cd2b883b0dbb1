//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario to batch_projection_output.csv

use anyhow::{Context, Result};
use clap::Parser;
use investment_projection::{params::load_scenarios, report::write_batch_summary, ScenarioRunner};
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Project a file of scenarios in parallel")]
struct Args {
    /// Scenario file with columns name,initial_principal,monthly_contribution,annual_rate_pct,years,inflation_pct
    #[arg(default_value = "scenarios.csv")]
    input: String,

    /// Where to write the summary rows
    #[arg(short, long, default_value = "batch_projection_output.csv")]
    output: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input);

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let results = ScenarioRunner::new().run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output))?;
    let totals = write_batch_summary(BufWriter::new(file), &scenarios, &results)
        .with_context(|| format!("writing {}", args.output))?;

    println!("Output written to {}", args.output);

    println!("\nBatch Summary:");
    println!("  Scenarios:           {}", scenarios.len());
    println!("  Written:             {}", totals.written);
    println!("  Failed:              {}", totals.failed);
    println!("  Sum of final values: {:.0}", totals.sum_final_balance);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
