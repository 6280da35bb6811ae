//! Accounts, password hashing and session tokens.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Opaque bearer token generation and hashing
//! - Credential rules for registration and profile updates
//! - The per-request `SessionContext`

mod password;
mod session;
mod token;

pub use password::{PasswordError, hash_password, verify_password};
pub use session::SessionContext;
pub use token::{generate_token, hash_token};

use serde::Deserialize;
use thiserror::Error;

use kodestudio_shared::AppError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LEN: usize = 50;

/// Account errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Username missing or blank.
    #[error("Username is required")]
    MissingUsername,

    /// Username longer than allowed.
    #[error("Username must be at most {MAX_USERNAME_LEN} characters")]
    UsernameTooLong,

    /// Password shorter than allowed.
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    /// Username already registered.
    #[error("Username already exists")]
    UsernameTaken,

    /// Unknown user or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::UsernameTaken => Self::Conflict(err.to_string()),
            AccountError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

/// Username and password as posted by the login and registration forms.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Validates credentials for registration, returning the trimmed username.
    pub fn validate_new(&self) -> Result<String, AccountError> {
        let username = validate_username(&self.username)?;
        validate_password(&self.password)?;
        Ok(username)
    }
}

/// Trims and checks a username.
pub fn validate_username(username: &str) -> Result<String, AccountError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AccountError::MissingUsername);
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AccountError::UsernameTooLong);
    }
    Ok(username.to_string())
}

/// Checks password length.
pub fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert_eq!(creds("  adrian ", "secreto").validate_new(), Ok("adrian".into()));
    }

    #[test]
    fn test_registration_rules() {
        assert_eq!(
            creds("   ", "secreto").validate_new(),
            Err(AccountError::MissingUsername)
        );
        assert_eq!(
            creds("adrian", "12345").validate_new(),
            Err(AccountError::PasswordTooShort)
        );
        assert_eq!(
            creds(&"x".repeat(51), "secreto").validate_new(),
            Err(AccountError::UsernameTooLong)
        );
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(AppError::from(AccountError::UsernameTaken).status_code(), 409);
        assert_eq!(
            AppError::from(AccountError::InvalidCredentials).status_code(),
            401
        );
        assert_eq!(
            AppError::from(AccountError::PasswordTooShort).status_code(),
            400
        );
    }
}
