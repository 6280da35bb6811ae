//! `SeaORM` entity definitions.

pub mod prelude;

pub mod clients;
pub mod project_requirements;
pub mod reviews;
pub mod sessions;
pub mod users;
