//! Closed-form growth and discounting formulas
//!
//! - Future value of monthly contributions (annuity-due convention)
//! - Future value of a single upfront amount, compounded annually
//! - Inflation discount factor back to present-day money

/// Rates at or below this magnitude are treated as zero
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Helper functions for future value calculations
pub struct GrowthCalculator;

impl GrowthCalculator {
    /// Future value of `amount` contributed every month for `n_months`.
    ///
    /// `FV = amount * ((1 + r)^n - 1) * (1 + r) / r`. A zero rate falls back
    /// to plain accumulation, `amount * n`.
    pub fn fv_annuity_due(amount: f64, n_months: u64, monthly_rate: f64) -> f64 {
        if monthly_rate.abs() <= ZERO_RATE_EPSILON {
            return amount * n_months as f64;
        }

        let growth = 1.0 + monthly_rate;
        amount * ((growth.powf(n_months as f64) - 1.0) * growth) / monthly_rate
    }

    /// Future value of `amount` invested once and compounded annually for `years`
    pub fn fv_lump_sum(amount: f64, years: u32, annual_rate: f64) -> f64 {
        amount * (1.0 + annual_rate).powf(f64::from(years))
    }

    /// Factor converting a nominal amount `years` from now into today's money
    pub fn inflation_discount_factor(annual_inflation: f64, years: u32) -> f64 {
        (1.0 + annual_inflation).powf(-f64::from(years))
    }

    /// Whether a monthly rate takes the linear accumulation path
    pub fn is_zero_rate(monthly_rate: f64) -> bool {
        monthly_rate.abs() <= ZERO_RATE_EPSILON
    }
}
