//! Core projection engine for SIP and lumpsum growth

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::growth::GrowthCalculator;
use super::timeline::{ProjectionResult, YearlyProjection};
use crate::plan::InvestmentPlan;

/// Configuration for a projection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Floor taxable gains at zero.
    ///
    /// When false, a year whose gross value is below contributions gets a
    /// negative tax, so its post-tax value exceeds its gross value.
    pub clamp_gains_at_zero: bool,
}

impl ProjectionConfig {
    pub fn with_clamped_gains() -> Self {
        Self {
            clamp_gains_at_zero: true,
        }
    }
}

/// Main projection engine
///
/// Holds no per-call state, so one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single plan
    pub fn project(&self, plan: &InvestmentPlan) -> ProjectionResult {
        if plan.duration_years == 0 {
            warn!("Plan has zero duration; returning an empty projection");
            return ProjectionResult::empty();
        }

        let monthly_rate = plan.monthly_return_rate();
        if GrowthCalculator::is_zero_rate(monthly_rate) {
            debug!("Zero return rate, periodic leg accumulates linearly");
        }

        let timeline: Vec<YearlyProjection> = (1..=plan.duration_years)
            .map(|year| self.project_year(plan, year))
            .collect();

        let result = ProjectionResult::from_timeline(timeline);
        debug!(
            "Projected {} years: contributed={:.2} gross={:.2} post_tax={:.2} real={:.2}",
            plan.duration_years,
            result.total_contributed,
            result.gross_returns,
            result.post_tax_returns,
            result.real_returns,
        );
        result
    }

    /// Calculate values at the end of a single plan year
    fn project_year(&self, plan: &InvestmentPlan, year: u32) -> YearlyProjection {
        let months = u64::from(year) * 12;

        let periodic_value =
            GrowthCalculator::fv_annuity_due(plan.periodic_amount, months, plan.monthly_return_rate());
        let lump_value =
            GrowthCalculator::fv_lump_sum(plan.one_time_amount, year, plan.annual_return_rate());
        let gross_value = periodic_value + lump_value;

        let contributed_amount = plan.periodic_amount * months as f64 + plan.one_time_amount;

        let post_tax_value = gross_value - self.tax_on_gains(gross_value - contributed_amount, plan);

        let real_value = post_tax_value
            * GrowthCalculator::inflation_discount_factor(plan.inflation_rate(), year);

        YearlyProjection {
            year,
            contributed_amount,
            gross_value,
            post_tax_value,
            real_value,
        }
    }

    fn tax_on_gains(&self, gains: f64, plan: &InvestmentPlan) -> f64 {
        let taxable = if self.config.clamp_gains_at_zero {
            gains.max(0.0)
        } else {
            gains
        };
        taxable * plan.tax_rate()
    }
}

/// Project a plan with the default configuration
pub fn compute_projection(plan: &InvestmentPlan) -> ProjectionResult {
    ProjectionEngine::default().project(plan)
}
