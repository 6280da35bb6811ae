//! Entity re-exports.

pub use super::clients::Entity as Clients;
pub use super::project_requirements::Entity as ProjectRequirements;
pub use super::reviews::Entity as Reviews;
pub use super::sessions::Entity as Sessions;
pub use super::users::Entity as Users;
