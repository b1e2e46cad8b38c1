//! Investment plan inputs, input ranges, and file loaders

mod data;
mod constraints;
pub mod loader;

pub use data::{InvestmentPlan, InvestmentType};
pub use constraints::{InputConstraints, Range};
pub use loader::{load_plan_json, load_plans, load_plans_from_reader, PlanRecord};
