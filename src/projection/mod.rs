//! Projection engine for SIP and lumpsum investment plans

mod growth;
mod engine;
mod timeline;

pub use growth::GrowthCalculator;
pub use engine::{compute_projection, ProjectionConfig, ProjectionEngine};
pub use timeline::{ChartSeries, ProjectionResult, ProjectionSummary, YearlyProjection};
