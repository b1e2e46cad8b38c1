//! Investment plan data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Which contribution model the caller has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentType {
    /// Monthly contributions (SIP)
    #[serde(alias = "sip")]
    Periodic,
    /// Single upfront contribution (lumpsum)
    #[serde(alias = "lumpsum", alias = "one_time", alias = "oneTime")]
    OneTime,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Periodic => "periodic",
            InvestmentType::OneTime => "one-time",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" | "sip" => Ok(InvestmentType::Periodic),
            "one-time" | "one_time" | "onetime" | "lumpsum" => Ok(InvestmentType::OneTime),
            other => Err(PlanError::UnknownInvestmentType(other.to_string())),
        }
    }
}

/// Parameters of a single "what if" investment scenario
///
/// Rates are percentages (12.0 means 12%). The engine computes with both
/// amounts as given; use [`InvestmentPlan::normalized`] to zero the amount
/// that the selected [`InvestmentType`] leaves inactive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentPlan {
    pub investment_type: InvestmentType,

    /// Contribution made at the end of every month
    pub periodic_amount: f64,

    /// Contribution made once at time zero
    pub one_time_amount: f64,

    /// Whole years the plan runs
    pub duration_years: u32,

    /// Expected nominal annual return, percent
    pub annual_return_rate_pct: f64,

    /// Expected annual inflation, percent
    pub annual_inflation_rate_pct: f64,

    /// Flat tax on gains, percent
    pub capital_gains_tax_rate_pct: f64,
}

impl Default for InvestmentPlan {
    fn default() -> Self {
        Self {
            investment_type: InvestmentType::Periodic,
            periodic_amount: 5_000.0,
            one_time_amount: 100_000.0,
            duration_years: 10,
            annual_return_rate_pct: 12.0,
            annual_inflation_rate_pct: 5.0,
            capital_gains_tax_rate_pct: 12.5,
        }
    }
}

impl InvestmentPlan {
    /// Monthly SIP plan with only the periodic leg active
    pub fn periodic(
        monthly_amount: f64,
        duration_years: u32,
        annual_return_rate_pct: f64,
        annual_inflation_rate_pct: f64,
        capital_gains_tax_rate_pct: f64,
    ) -> Self {
        Self {
            investment_type: InvestmentType::Periodic,
            periodic_amount: monthly_amount,
            one_time_amount: 0.0,
            duration_years,
            annual_return_rate_pct,
            annual_inflation_rate_pct,
            capital_gains_tax_rate_pct,
        }
    }

    /// Lumpsum plan with only the one-time leg active
    pub fn one_time(
        amount: f64,
        duration_years: u32,
        annual_return_rate_pct: f64,
        annual_inflation_rate_pct: f64,
        capital_gains_tax_rate_pct: f64,
    ) -> Self {
        Self {
            investment_type: InvestmentType::OneTime,
            periodic_amount: 0.0,
            one_time_amount: amount,
            duration_years,
            annual_return_rate_pct,
            annual_inflation_rate_pct,
            capital_gains_tax_rate_pct,
        }
    }

    /// Copy of this plan with the amount not selected by `investment_type` set to zero
    pub fn normalized(&self) -> Self {
        let mut plan = self.clone();
        match plan.investment_type {
            InvestmentType::Periodic => plan.one_time_amount = 0.0,
            InvestmentType::OneTime => plan.periodic_amount = 0.0,
        }
        plan
    }

    pub fn monthly_return_rate(&self) -> f64 {
        self.annual_return_rate_pct / 100.0 / 12.0
    }

    pub fn annual_return_rate(&self) -> f64 {
        self.annual_return_rate_pct / 100.0
    }

    pub fn inflation_rate(&self) -> f64 {
        self.annual_inflation_rate_pct / 100.0
    }

    pub fn tax_rate(&self) -> f64 {
        self.capital_gains_tax_rate_pct / 100.0
    }
}
