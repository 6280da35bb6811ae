//! Core business logic for KodEstudio.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `estimate` - Project budget estimator
//! - `faq` - Keyword FAQ assistant
//! - `client` - Client contact validation
//! - `requirement` - Project requirement intake validation and stats shape
//! - `auth` - Password hashing, session tokens and credential rules

pub mod auth;
pub mod client;
pub mod estimate;
pub mod faq;
pub mod requirement;
