//! Error types for plan loading and input validation
//!
//! The projection engine itself is infallible; these errors only arise at the
//! edges (reading plans from disk, checking caller-supplied ranges).

use thiserror::Error;

/// Errors raised while loading or validating investment plans
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Unknown investment type: {0}")]
    UnknownInvestmentType(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
