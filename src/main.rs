//! SIP Projection CLI
//!
//! Command-line interface for projecting a single investment plan

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use sip_projection::format::format_inr;
use sip_projection::plan::load_plan_json;
use sip_projection::{
    InputConstraints, InvestmentPlan, InvestmentType, ProjectionConfig, ProjectionEngine,
    ProjectionResult, ScenarioRunner,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliInvestmentType {
    Sip,
    Lumpsum,
}

impl From<CliInvestmentType> for InvestmentType {
    fn from(value: CliInvestmentType) -> Self {
        match value {
            CliInvestmentType::Sip => InvestmentType::Periodic,
            CliInvestmentType::Lumpsum => InvestmentType::OneTime,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(
    name = "sip_projection",
    about = "Project SIP / lumpsum investment growth with tax and inflation adjustments"
)]
struct Cli {
    #[arg(long, help = "JSON plan file; flags below override its fields")]
    plan: Option<PathBuf>,
    #[arg(long, value_enum)]
    investment_type: Option<CliInvestmentType>,
    #[arg(long, help = "Monthly SIP contribution")]
    monthly_amount: Option<f64>,
    #[arg(long, help = "One-time contribution at the start")]
    lumpsum_amount: Option<f64>,
    #[arg(long)]
    duration_years: Option<u32>,
    #[arg(long, help = "Expected annual return in percent, e.g. 12")]
    return_rate: Option<f64>,
    #[arg(long, help = "Annual inflation in percent, e.g. 5")]
    inflation_rate: Option<f64>,
    #[arg(long, help = "Tax on gains in percent, e.g. 12.5")]
    tax_rate: Option<f64>,
    #[arg(
        long,
        default_value_t = false,
        help = "Keep both monthly and lumpsum amounts instead of only the selected type"
    )]
    combined: bool,
    #[arg(long, default_value_t = false, help = "Clamp inputs to the calculator's allowed ranges")]
    clamp_inputs: bool,
    #[arg(long, default_value_t = false, help = "Do not give a tax rebate on negative gains")]
    clamp_gains: bool,
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with_all = ["format", "output"],
        help = "Compare final values across these return rates, e.g. 8,10,12 (table only, stdout)"
    )]
    sweep: Vec<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[arg(long, help = "Write json/csv output to this file instead of stdout")]
    output: Option<PathBuf>,
}

impl Cli {
    fn build_plan(&self) -> Result<InvestmentPlan> {
        let mut plan = match &self.plan {
            Some(path) => load_plan_json(path)
                .with_context(|| format!("Failed to load plan from {}", path.display()))?,
            None => InvestmentPlan::default(),
        };

        if let Some(kind) = self.investment_type {
            plan.investment_type = kind.into();
        }
        if let Some(v) = self.monthly_amount {
            plan.periodic_amount = v;
        }
        if let Some(v) = self.lumpsum_amount {
            plan.one_time_amount = v;
        }
        if let Some(v) = self.duration_years {
            plan.duration_years = v;
        }
        if let Some(v) = self.return_rate {
            plan.annual_return_rate_pct = v;
        }
        if let Some(v) = self.inflation_rate {
            plan.annual_inflation_rate_pct = v;
        }
        if let Some(v) = self.tax_rate {
            plan.capital_gains_tax_rate_pct = v;
        }

        if !self.combined {
            plan = plan.normalized();
        }

        let constraints = InputConstraints::default();
        if self.clamp_inputs {
            plan = constraints.clamp(&plan);
        } else if let Err(e) = constraints.validate(&plan) {
            warn!("Projecting unclamped input: {}", e);
        }

        Ok(plan)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let plan = cli.build_plan()?;
    let config = ProjectionConfig {
        clamp_gains_at_zero: cli.clamp_gains,
    };

    if !cli.sweep.is_empty() {
        let runner = ScenarioRunner::new(config);
        print_sweep(&runner, &plan, &cli.sweep);
        return Ok(());
    }

    info!("Projecting {:?}", plan);
    let engine = ProjectionEngine::new(config);
    let result = engine.project(&plan);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Unable to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Table => write_table(&mut out, &plan, &result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &result)?,
    }

    if let Some(path) = &cli.output {
        println!("Results written to: {}", path.display());
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, plan: &InvestmentPlan, result: &ProjectionResult) -> Result<()> {
    writeln!(out, "SIP Projection")?;
    writeln!(out, "==============\n")?;

    writeln!(out, "Plan ({}):", plan.investment_type)?;
    writeln!(out, "  Monthly Amount: {}", format_inr(plan.periodic_amount))?;
    writeln!(out, "  Lumpsum Amount: {}", format_inr(plan.one_time_amount))?;
    writeln!(out, "  Duration:       {} years", plan.duration_years)?;
    writeln!(out, "  Return Rate:    {:.1}%", plan.annual_return_rate_pct)?;
    writeln!(out, "  Inflation Rate: {:.1}%", plan.annual_inflation_rate_pct)?;
    writeln!(out, "  Tax Rate:       {:.1}%", plan.capital_gains_tax_rate_pct)?;
    writeln!(out)?;

    writeln!(
        out,
        "{:>4} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Invested", "Total Value", "Post-Tax", "Real Value"
    )?;
    writeln!(out, "{}", "-".repeat(72))?;
    for row in &result.timeline {
        writeln!(
            out,
            "{:>4} {:>16} {:>16} {:>16} {:>16}",
            row.year,
            format_inr(row.contributed_amount),
            format_inr(row.gross_value),
            format_inr(row.post_tax_value),
            format_inr(row.real_value),
        )?;
    }

    let summary = result.summary();
    writeln!(out, "\nSummary:")?;
    writeln!(out, "  Total Investment:   {}", format_inr(summary.total_contributed))?;
    writeln!(out, "  Total Returns:      {}", format_inr(summary.gross_returns))?;
    writeln!(out, "  Total Gains:        {}", format_inr(summary.total_gains))?;
    writeln!(out, "  Tax on Gains:       {}", format_inr(summary.tax_paid))?;
    writeln!(out, "  Post-Tax Returns:   {}", format_inr(summary.post_tax_returns))?;
    writeln!(out, "  Inflation Adjusted: {}", format_inr(summary.real_returns))?;

    Ok(())
}

fn print_sweep(runner: &ScenarioRunner, plan: &InvestmentPlan, rates: &[f64]) {
    println!(
        "{:>8} {:>16} {:>16} {:>16} {:>16}",
        "Return", "Invested", "Total Value", "Post-Tax", "Real Value"
    );
    println!("{}", "-".repeat(76));
    for scenario in runner.run_rate_sweep(plan, rates) {
        let result = &scenario.result;
        println!(
            "{:>7.1}% {:>16} {:>16} {:>16} {:>16}",
            scenario.annual_return_rate_pct,
            format_inr(result.total_contributed),
            format_inr(result.gross_returns),
            format_inr(result.post_tax_returns),
            format_inr(result.real_returns),
        );
    }
}

fn write_csv<W: Write>(out: &mut W, result: &ProjectionResult) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &result.timeline {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
