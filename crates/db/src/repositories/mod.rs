//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod client;
pub mod requirement;
pub mod review;
pub mod search;
pub mod session;
pub mod user;

pub use client::{ClientFilter, ClientRepository};
pub use requirement::{RequirementFilter, RequirementRepository};
pub use review::ReviewRepository;
pub use session::SessionRepository;
pub use user::{UpdateUserInput, UserRepository};
