//! Allowed input ranges for plan fields
//!
//! The projection engine trusts its input. These helpers belong to the input
//! side: clamp slider/form values into range, or reject a plan that a batch
//! file supplied out of range.

use serde::{Deserialize, Serialize};

use super::{InvestmentPlan, InvestmentType};
use crate::error::PlanError;

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str, value: f64) -> Result<(), PlanError> {
        if !value.is_finite() {
            return Err(PlanError::NonFinite { field });
        }
        if !self.contains(value) {
            return Err(PlanError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Per-field input ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConstraints {
    pub monthly_amount: Range,
    pub one_time_amount: Range,
    pub duration_years: Range,
    pub return_rate_pct: Range,
    pub tax_rate_pct: Range,
    pub inflation_rate_pct: Range,
}

impl Default for InputConstraints {
    fn default() -> Self {
        Self {
            monthly_amount: Range::new(100.0, 1_000_000.0),
            one_time_amount: Range::new(0.0, 10_000_000.0),
            duration_years: Range::new(1.0, 40.0),
            return_rate_pct: Range::new(1.0, 30.0),
            tax_rate_pct: Range::new(0.0, 40.0),
            inflation_rate_pct: Range::new(0.0, 20.0),
        }
    }
}

impl InputConstraints {
    /// Whether the monthly range applies to `plan`.
    ///
    /// Always for a SIP plan; for a lumpsum plan only when a monthly amount
    /// was actually given, so the zeroed inactive leg is left alone.
    fn checks_monthly_amount(plan: &InvestmentPlan) -> bool {
        match plan.investment_type {
            InvestmentType::Periodic => true,
            InvestmentType::OneTime => plan.periodic_amount != 0.0,
        }
    }

    /// Clamp every field of `plan` into range
    pub fn clamp(&self, plan: &InvestmentPlan) -> InvestmentPlan {
        let periodic_amount = if Self::checks_monthly_amount(plan) {
            self.monthly_amount.clamp(plan.periodic_amount)
        } else {
            0.0
        };

        InvestmentPlan {
            investment_type: plan.investment_type,
            periodic_amount,
            one_time_amount: self.one_time_amount.clamp(plan.one_time_amount),
            duration_years: self.duration_years.clamp(plan.duration_years as f64).round() as u32,
            annual_return_rate_pct: self.return_rate_pct.clamp(plan.annual_return_rate_pct),
            annual_inflation_rate_pct: self
                .inflation_rate_pct
                .clamp(plan.annual_inflation_rate_pct),
            capital_gains_tax_rate_pct: self.tax_rate_pct.clamp(plan.capital_gains_tax_rate_pct),
        }
    }

    /// Check `plan` against the ranges, reporting the first violation
    pub fn validate(&self, plan: &InvestmentPlan) -> Result<(), PlanError> {
        if Self::checks_monthly_amount(plan) {
            self.monthly_amount.check("periodic_amount", plan.periodic_amount)?;
        }
        self.one_time_amount.check("one_time_amount", plan.one_time_amount)?;
        self.duration_years.check("duration_years", plan.duration_years as f64)?;
        self.return_rate_pct
            .check("annual_return_rate_pct", plan.annual_return_rate_pct)?;
        self.inflation_rate_pct
            .check("annual_inflation_rate_pct", plan.annual_inflation_rate_pct)?;
        self.tax_rate_pct
            .check("capital_gains_tax_rate_pct", plan.capital_gains_tax_rate_pct)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_valid() {
        let constraints = InputConstraints::default();
        assert!(constraints.validate(&InvestmentPlan::default()).is_ok());
    }

    #[test]
    fn test_clamp_pulls_fields_into_range() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan {
            periodic_amount: 50.0,
            duration_years: 55,
            annual_return_rate_pct: 45.0,
            annual_inflation_rate_pct: -1.0,
            capital_gains_tax_rate_pct: 90.0,
            ..InvestmentPlan::default()
        };

        let clamped = constraints.clamp(&plan);
        assert_eq!(clamped.periodic_amount, 100.0);
        assert_eq!(clamped.duration_years, 40);
        assert_eq!(clamped.annual_return_rate_pct, 30.0);
        assert_eq!(clamped.annual_inflation_rate_pct, 0.0);
        assert_eq!(clamped.capital_gains_tax_rate_pct, 40.0);
        assert!(constraints.validate(&clamped).is_ok());
    }

    #[test]
    fn test_clamp_keeps_inactive_periodic_leg_at_zero() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan::one_time(100_000.0, 10, 12.0, 5.0, 12.5);
        assert_eq!(constraints.clamp(&plan).periodic_amount, 0.0);
    }

    #[test]
    fn test_sip_plan_with_zero_monthly_amount() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan {
            investment_type: InvestmentType::Periodic,
            periodic_amount: 0.0,
            ..InvestmentPlan::default()
        }
        .normalized();

        assert_eq!(constraints.clamp(&plan).periodic_amount, 100.0);
        match constraints.validate(&plan) {
            Err(PlanError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "periodic_amount");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_lumpsum_plan_with_given_monthly_amount_is_checked() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan {
            investment_type: InvestmentType::OneTime,
            periodic_amount: 50.0,
            ..InvestmentPlan::default()
        };

        assert_eq!(constraints.clamp(&plan).periodic_amount, 100.0);
        assert!(constraints.validate(&plan).is_err());
        assert!(constraints.validate(&plan.normalized()).is_ok());
    }

    #[test]
    fn test_zero_duration_clamps_to_one_year() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan {
            duration_years: 0,
            ..InvestmentPlan::default()
        };
        assert_eq!(constraints.clamp(&plan).duration_years, 1);
    }

    #[test]
    fn test_validate_reports_field() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan {
            annual_return_rate_pct: 0.0,
            ..InvestmentPlan::default()
        };

        match constraints.validate(&plan) {
            Err(PlanError::OutOfRange { field, .. }) => assert_eq!(field, "annual_return_rate_pct"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let constraints = InputConstraints::default();
        let plan = InvestmentPlan {
            one_time_amount: f64::INFINITY,
            ..InvestmentPlan::default()
        };
        assert!(matches!(
            constraints.validate(&plan),
            Err(PlanError::NonFinite { field: "one_time_amount" })
        ));
    }
}
