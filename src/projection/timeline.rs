//! Projection output structures

use serde::{Deserialize, Serialize};

/// Projected values at the end of one plan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// 1-based plan year
    pub year: u32,

    /// Cumulative principal contributed through this year
    pub contributed_amount: f64,

    /// Portfolio value before tax
    pub gross_value: f64,

    /// Gross value less tax on gains
    pub post_tax_value: f64,

    /// Post-tax value in today's money
    pub real_value: f64,
}

impl YearlyProjection {
    /// Gross value minus contributed principal (may be negative)
    pub fn gains(&self) -> f64 {
        self.gross_value - self.contributed_amount
    }

    /// Tax deducted from the gross value
    pub fn tax(&self) -> f64 {
        self.gross_value - self.post_tax_value
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub total_contributed: f64,
    pub gross_returns: f64,
    pub post_tax_returns: f64,
    pub real_returns: f64,

    /// One entry per plan year, ascending
    pub timeline: Vec<YearlyProjection>,
}

impl ProjectionResult {
    /// Result with no years and all totals zero
    pub fn empty() -> Self {
        Self {
            total_contributed: 0.0,
            gross_returns: 0.0,
            post_tax_returns: 0.0,
            real_returns: 0.0,
            timeline: Vec::new(),
        }
    }

    /// Build a result whose headline totals come from the last timeline entry
    pub fn from_timeline(timeline: Vec<YearlyProjection>) -> Self {
        match timeline.last().copied() {
            Some(last) => Self {
                total_contributed: last.contributed_amount,
                gross_returns: last.gross_value,
                post_tax_returns: last.post_tax_value,
                real_returns: last.real_value,
                timeline,
            },
            None => Self::empty(),
        }
    }

    pub fn duration_years(&self) -> u32 {
        self.timeline.len() as u32
    }

    /// Entry for a 1-based plan year
    pub fn year(&self, year: u32) -> Option<&YearlyProjection> {
        year.checked_sub(1)
            .and_then(|idx| self.timeline.get(idx as usize))
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_gains = self.gross_returns - self.total_contributed;

        ProjectionSummary {
            duration_years: self.duration_years(),
            total_contributed: self.total_contributed,
            gross_returns: self.gross_returns,
            post_tax_returns: self.post_tax_returns,
            real_returns: self.real_returns,
            total_gains,
            tax_paid: self.gross_returns - self.post_tax_returns,
            inflation_loss: self.post_tax_returns - self.real_returns,
        }
    }

    /// Four per-year series for plotting, each aligned with `years`
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            years: self.timeline.iter().map(|y| y.year).collect(),
            contributed: self.timeline.iter().map(|y| y.contributed_amount).collect(),
            gross: self.timeline.iter().map(|y| y.gross_value).collect(),
            post_tax: self.timeline.iter().map(|y| y.post_tax_value).collect(),
            real: self.timeline.iter().map(|y| y.real_value).collect(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub duration_years: u32,
    pub total_contributed: f64,
    pub gross_returns: f64,
    pub post_tax_returns: f64,
    pub real_returns: f64,
    pub total_gains: f64,
    pub tax_paid: f64,
    pub inflation_loss: f64,
}

/// Column-oriented view of the timeline for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub years: Vec<u32>,
    pub contributed: Vec<f64>,
    pub gross: Vec<f64>,
    pub post_tax: Vec<f64>,
    pub real: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: u32, contributed: f64, gross: f64, post_tax: f64, real: f64) -> YearlyProjection {
        YearlyProjection {
            year,
            contributed_amount: contributed,
            gross_value: gross,
            post_tax_value: post_tax,
            real_value: real,
        }
    }

    #[test]
    fn test_from_timeline_uses_last_entry() {
        let result = ProjectionResult::from_timeline(vec![
            row(1, 100.0, 110.0, 108.0, 100.0),
            row(2, 200.0, 230.0, 225.0, 200.0),
        ]);

        assert_eq!(result.total_contributed, 200.0);
        assert_eq!(result.gross_returns, 230.0);
        assert_eq!(result.post_tax_returns, 225.0);
        assert_eq!(result.real_returns, 200.0);
        assert_eq!(result.duration_years(), 2);
    }

    #[test]
    fn test_empty_timeline_gives_zero_totals() {
        let result = ProjectionResult::from_timeline(Vec::new());
        assert_eq!(result, ProjectionResult::empty());
        assert!(result.year(1).is_none());
    }

    #[test]
    fn test_year_lookup_is_one_based() {
        let result = ProjectionResult::from_timeline(vec![
            row(1, 100.0, 110.0, 108.0, 100.0),
            row(2, 200.0, 230.0, 225.0, 200.0),
        ]);
        assert!(result.year(0).is_none());
        assert_eq!(result.year(2).map(|y| y.gross_value), Some(230.0));
        assert!(result.year(3).is_none());
    }

    #[test]
    fn test_summary_breakdown() {
        let result = ProjectionResult::from_timeline(vec![row(1, 1_000.0, 1_200.0, 1_150.0, 1_100.0)]);
        let summary = result.summary();

        assert!((summary.total_gains - 200.0).abs() < 1e-10);
        assert!((summary.tax_paid - 50.0).abs() < 1e-10);
        assert!((summary.inflation_loss - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_yearly_gains_and_tax() {
        let entry = row(3, 1_000.0, 900.0, 910.0, 850.0);
        assert!((entry.gains() + 100.0).abs() < 1e-10);
        assert!((entry.tax() + 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_chart_series_alignment() {
        let result = ProjectionResult::from_timeline(vec![
            row(1, 100.0, 110.0, 108.0, 100.0),
            row(2, 200.0, 230.0, 225.0, 200.0),
        ]);
        let series = result.chart_series();

        assert_eq!(series.years, vec![1, 2]);
        assert_eq!(series.contributed, vec![100.0, 200.0]);
        assert_eq!(series.gross, vec![110.0, 230.0]);
        assert_eq!(series.post_tax, vec![108.0, 225.0]);
        assert_eq!(series.real, vec![100.0, 200.0]);
    }
}
