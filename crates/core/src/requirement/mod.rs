//! Project requirement intake: validation and statistics types.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::RequirementError;
pub use types::{RequirementData, RequirementDraft, RequirementStats};
