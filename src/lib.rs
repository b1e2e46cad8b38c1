//! SIP Projection - Deterministic growth engine for periodic and lumpsum investments
//!
//! This library provides:
//! - Closed-form SIP (annuity-due) and lumpsum compound growth
//! - Tax on gains and inflation-adjusted real values
//! - Year-by-year timelines for charting
//! - Input ranges, CSV/JSON plan loading, and batch scenario runs

pub mod error;
pub mod format;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::PlanError;
pub use plan::{InputConstraints, InvestmentPlan, InvestmentType, PlanRecord};
pub use projection::{
    compute_projection, ProjectionConfig, ProjectionEngine, ProjectionResult, YearlyProjection,
};
pub use scenario::ScenarioRunner;
