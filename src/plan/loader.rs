//! Load investment plans from CSV and JSON files

use csv::Reader;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{InvestmentPlan, InvestmentType};
use crate::error::PlanError;

/// A plan read from a batch file together with its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub plan_id: u32,
    pub plan: InvestmentPlan,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "InvestmentType")]
    investment_type: String,
    #[serde(rename = "MonthlyAmount", default)]
    monthly_amount: f64,
    #[serde(rename = "LumpsumAmount", default)]
    lumpsum_amount: f64,
    #[serde(rename = "DurationYears")]
    duration_years: u32,
    #[serde(rename = "ReturnRate")]
    return_rate: f64,
    #[serde(rename = "InflationRate", default)]
    inflation_rate: f64,
    #[serde(rename = "TaxRate", default)]
    tax_rate: f64,
}

impl CsvRow {
    fn to_record(self) -> Result<PlanRecord, PlanError> {
        let investment_type: InvestmentType = self.investment_type.parse()?;

        Ok(PlanRecord {
            plan_id: self.plan_id,
            plan: InvestmentPlan {
                investment_type,
                periodic_amount: self.monthly_amount,
                one_time_amount: self.lumpsum_amount,
                duration_years: self.duration_years,
                annual_return_rate_pct: self.return_rate,
                annual_inflation_rate_pct: self.inflation_rate,
                capital_gains_tax_rate_pct: self.tax_rate,
            },
        })
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<PlanRecord>, PlanError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let plans = load_plans_from_reader(file)?;
    info!("Loaded {} plans from {}", plans.len(), path.display());
    Ok(plans)
}

/// Load plans from any reader (e.g., string buffer, stdin)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PlanRecord>, PlanError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_record()?);
    }

    Ok(plans)
}

/// Load a single plan from a JSON file; missing fields take the defaults
pub fn load_plan_json<P: AsRef<Path>>(path: P) -> Result<InvestmentPlan, PlanError> {
    let file = File::open(path.as_ref())?;
    let plan = serde_json::from_reader(BufReader::new(file))?;
    Ok(plan)
}
