//! Scenario runner for batch and sensitivity projections
//!
//! Holds one engine configuration and applies it to many plans, or to one
//! plan across a range of return rates.

use rayon::prelude::*;

use crate::plan::InvestmentPlan;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Runner for projecting many plans with a shared configuration
///
/// # Example
/// ```
/// use sip_projection::{InvestmentPlan, ScenarioRunner};
///
/// let runner = ScenarioRunner::default();
/// let plan = InvestmentPlan::periodic(5_000.0, 10, 12.0, 5.0, 12.5);
/// let results = runner.run_rate_sweep(&plan, &[8.0, 10.0, 12.0]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

/// One point of a return-rate sweep
#[derive(Debug, Clone)]
pub struct RateScenario {
    pub annual_return_rate_pct: f64,
    pub result: ProjectionResult,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, plan: &InvestmentPlan) -> ProjectionResult {
        self.engine.project(plan)
    }

    /// Run projections for multiple plans in parallel; output order matches input
    pub fn run_batch(&self, plans: &[InvestmentPlan]) -> Vec<ProjectionResult> {
        plans.par_iter().map(|plan| self.engine.project(plan)).collect()
    }

    /// Project the same plan once per return rate
    pub fn run_rate_sweep(&self, plan: &InvestmentPlan, rates_pct: &[f64]) -> Vec<RateScenario> {
        rates_pct
            .iter()
            .map(|&rate| {
                let scenario = InvestmentPlan {
                    annual_return_rate_pct: rate,
                    ..plan.clone()
                };
                RateScenario {
                    annual_return_rate_pct: rate,
                    result: self.engine.project(&scenario),
                }
            })
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_projection;

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::default();
        let plans: Vec<_> = (1..=12)
            .map(|years| InvestmentPlan::periodic(1_000.0, years, 10.0, 5.0, 10.0))
            .collect();

        let results = runner.run_batch(&plans);
        assert_eq!(results.len(), plans.len());
        for (plan, result) in plans.iter().zip(&results) {
            assert_eq!(result.timeline.len(), plan.duration_years as usize);
            assert_eq!(*result, compute_projection(plan));
        }
    }

    #[test]
    fn test_rate_sweep_orders_by_growth() {
        let runner = ScenarioRunner::default();
        let plan = InvestmentPlan::periodic(5_000.0, 10, 12.0, 5.0, 12.5);

        let results = runner.run_rate_sweep(&plan, &[6.0, 9.0, 12.0]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].annual_return_rate_pct, 12.0);

        // Higher return rate should result in higher gross value
        assert!(results[2].result.gross_returns > results[1].result.gross_returns);
        assert!(results[1].result.gross_returns > results[0].result.gross_returns);

        // Contributions do not depend on the rate
        assert_eq!(results[0].result.total_contributed, results[2].result.total_contributed);
    }

    #[test]
    fn test_runner_uses_config() {
        let runner = ScenarioRunner::new(ProjectionConfig::with_clamped_gains());
        assert!(runner.config().clamp_gains_at_zero);

        let plan = InvestmentPlan::one_time(10_000.0, 2, -5.0, 0.0, 30.0);
        let result = runner.run(&plan);
        assert_eq!(result.post_tax_returns, result.gross_returns);
    }
}
