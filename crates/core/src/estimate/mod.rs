//! Project budget estimation for the public simulator.

pub mod engine;
pub mod span;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{BudgetEstimator, estimate};
pub use span::EngagementSpan;
pub use types::{EstimateBreakdown, EstimationInput, EstimationResult, Priority, ProjectType};
