//! Request middleware.

pub mod auth;

pub use auth::{CurrentSession, auth_middleware};
