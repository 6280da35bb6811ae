//! Project requirement error types.

use thiserror::Error;

use kodestudio_shared::AppError;

/// Project requirement validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequirementError {
    /// One or more required fields are absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Estimated budget below zero.
    #[error("estimatedBudget cannot be negative")]
    NegativeBudget,
}

impl From<RequirementError> for AppError {
    fn from(err: RequirementError) -> Self {
        Self::Validation(err.to_string())
    }
}
