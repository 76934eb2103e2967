//! ROI Projection CLI
//!
//! Command-line interface for running scenario projections

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use roi_projection::assessment::AssessmentPrompt;
use roi_projection::inputs::{load_inputs, load_inputs_batch};
use roi_projection::report::{render_summary, write_batch_csv, write_yearly_csv};
use roi_projection::{AnalysisReport, ScenarioRunner, ScenarioSet};

#[derive(Debug, Parser)]
#[command(name = "roi-projection", version, about = "Multi-year ROI projection for a product investment")]
struct Args {
    /// JSON file holding a single analysis request
    #[arg(short, long, conflicts_with = "batch")]
    input: Option<PathBuf>,

    /// CSV file holding many analysis requests
    #[arg(short, long)]
    batch: Option<PathBuf>,

    /// Write the yearly tables of every scenario to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full report as JSON instead of the summary table
    #[arg(long)]
    json: bool,

    /// Print the narrative assessment prompt for the request
    #[arg(long, requires = "input")]
    prompt: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match (&args.input, &args.batch) {
        (Some(path), _) => run_single(&args, path),
        (None, Some(path)) => run_batch(&args, path),
        (None, None) => bail!("either --input or --batch is required"),
    }
}

fn run_single(args: &Args, path: &Path) -> Result<()> {
    let inputs = load_inputs(path)
        .with_context(|| format!("failed to load request from {}", path.display()))?;
    let report = AnalysisReport::build(&inputs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} ({} years)", inputs.product_name, inputs.projection_years);
        println!("{}", "=".repeat(40));
        print!("{}", render_summary(&report.scenarios));
        print_yearly_table(&report.scenarios);
    }

    if args.prompt {
        println!();
        println!("{}", AssessmentPrompt::new(&inputs, &report.scenarios).render());
    }

    if let Some(csv_path) = &args.csv {
        export_csv(&report.scenarios, csv_path)?;
    }

    Ok(())
}

fn run_batch(args: &Args, path: &Path) -> Result<()> {
    let requests = load_inputs_batch(path)
        .with_context(|| format!("failed to load requests from {}", path.display()))?;
    let results = ScenarioRunner::new().run_batch(&requests);

    let mut reports = Vec::with_capacity(results.len());
    for (inputs, result) in requests.iter().zip(results) {
        let scenarios = result.with_context(|| format!("projection failed for {}", inputs.product_name))?;
        reports.push(AnalysisReport::with_timestamp(inputs, scenarios, chrono::Utc::now()));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("\n{}", report.inputs.product_name);
            print!("{}", render_summary(&report.scenarios));
        }
    }

    if let Some(csv_path) = &args.csv {
        let file = File::create(csv_path)
            .with_context(|| format!("unable to create {}", csv_path.display()))?;
        write_batch_csv(&reports, file)?;
        println!("\nYearly tables written to: {}", csv_path.display());
    }

    Ok(())
}

fn print_yearly_table(scenarios: &ScenarioSet) {
    for (kind, result) in scenarios.iter() {
        println!("\n{} [{}]:", result.label, kind);
        println!("{:>4} {:>16} {:>16} {:>16} {:>16}", "Year", "Revenue", "Costs", "Profit", "Cumulative");
        for row in result.rows() {
            println!(
                "{:>4} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
                row.year, row.revenue, row.costs, row.profit, row.cumulative_profit,
            );
        }
    }
}

fn export_csv(scenarios: &ScenarioSet, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
    write_yearly_csv(scenarios, file)?;
    println!("\nYearly tables written to: {}", path.display());
    Ok(())
}
