//! Run projections for every plan in a CSV file
//!
//! Outputs one summary row per plan

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use sip_projection::format::format_inr;
use sip_projection::plan::load_plans;
use sip_projection::{InputConstraints, ProjectionConfig, ProjectionEngine};

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Project every plan in a CSV file")]
struct Args {
    /// Plans CSV (PlanID,InvestmentType,MonthlyAmount,LumpsumAmount,DurationYears,ReturnRate,InflationRate,TaxRate)
    #[arg(long, default_value = "plans.csv")]
    input: PathBuf,
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
    #[arg(long, default_value_t = false, help = "Do not give a tax rebate on negative gains")]
    clamp_gains: bool,
    #[arg(long, default_value_t = false, help = "Skip plans outside the calculator's allowed ranges")]
    strict: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BatchRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    investment_type: String,
    duration_years: u32,
    total_contributed: f64,
    gross_returns: f64,
    post_tax_returns: f64,
    real_returns: f64,
    total_gains: f64,
    tax_paid: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    println!("Loading plans from {}...", args.input.display());
    let mut records = load_plans(&args.input)
        .with_context(|| format!("Failed to load plans from {}", args.input.display()))?;
    println!("Loaded {} plans in {:?}", records.len(), start.elapsed());

    if args.strict {
        let constraints = InputConstraints::default();
        records.retain(|record| match constraints.validate(&record.plan) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping plan {}: {}", record.plan_id, e);
                false
            }
        });
    }

    let engine = ProjectionEngine::new(ProjectionConfig {
        clamp_gains_at_zero: args.clamp_gains,
    });

    println!("Running projections...");
    let proj_start = Instant::now();

    // Run projections in parallel
    let rows: Vec<BatchRow> = records
        .par_iter()
        .map(|record| {
            let summary = engine.project(&record.plan).summary();
            BatchRow {
                plan_id: record.plan_id,
                investment_type: record.plan.investment_type.to_string(),
                duration_years: summary.duration_years,
                total_contributed: summary.total_contributed,
                gross_returns: summary.gross_returns,
                post_tax_returns: summary.post_tax_returns,
                real_returns: summary.real_returns,
                total_gains: summary.total_gains,
                tax_paid: summary.tax_paid,
            }
        })
        .collect();

    info!("Projected {} plans in {:?}", rows.len(), proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    let total_contributed: f64 = rows.iter().map(|r| r.total_contributed).sum();
    let total_gross: f64 = rows.iter().map(|r| r.gross_returns).sum();
    let total_real: f64 = rows.iter().map(|r| r.real_returns).sum();

    println!("\nBatch Summary:");
    println!("  Plans:            {}", rows.len());
    println!("  Total Invested:   {}", format_inr(total_contributed));
    println!("  Total Returns:    {}", format_inr(total_gross));
    println!("  Real Returns:     {}", format_inr(total_real));

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
