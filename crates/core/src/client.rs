//! Client records: the studio's customer contact list.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kodestudio_shared::AppError;

/// Client validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// A required field is missing or blank.
    #[error("Please fill in the {0}")]
    MissingField(&'static str),

    /// The email address is malformed.
    #[error("Ingrese una dirección de email válida")]
    InvalidEmail,
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Client fields as submitted by the client form.
///
/// Every field is optional on the wire so a missing one can be reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDraft {
    /// Full name.
    pub nombre: Option<String>,
    /// Mobile phone.
    pub celular: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// City.
    pub ciudad: Option<String>,
}

/// A validated client, ready to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    /// Full name.
    pub nombre: String,
    /// Mobile phone.
    pub celular: String,
    /// Email address.
    pub email: String,
    /// City.
    pub ciudad: String,
}

impl ClientDraft {
    /// Checks required fields in form order, then the email format.
    ///
    /// Values are trimmed.
    pub fn validate(self) -> Result<ClientData, ClientError> {
        let nombre = required(self.nombre, "nombre")?;
        let celular = required(self.celular, "celular")?;
        let email = required(self.email, "email")?;
        let ciudad = required(self.ciudad, "ciudad")?;

        if !is_valid_email(&email) {
            return Err(ClientError::InvalidEmail);
        }

        Ok(ClientData {
            nombre,
            celular,
            email,
            ciudad,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ClientError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ClientError::MissingField(field)),
    }
}

/// Accepts `local@domain.tld`: no whitespace, one `@`, and a dot in the domain
/// with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot must have text before and after it.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft() -> ClientDraft {
        ClientDraft {
            nombre: Some("Ana Torres".into()),
            celular: Some("987654321".into()),
            email: Some("ana@example.pe".into()),
            ciudad: Some("Lima".into()),
        }
    }

    #[test]
    fn test_valid_client() {
        let data = draft().validate().unwrap();
        assert_eq!(data.nombre, "Ana Torres");
        assert_eq!(data.ciudad, "Lima");
    }

    #[test]
    fn test_trims_values() {
        let mut d = draft();
        d.ciudad = Some("  Arequipa ".into());
        assert_eq!(d.validate().unwrap().ciudad, "Arequipa");
    }

    #[test]
    fn test_reports_first_missing_field() {
        let d = ClientDraft {
            nombre: Some("Ana".into()),
            ..ClientDraft::default()
        };
        assert_eq!(d.validate(), Err(ClientError::MissingField("celular")));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut d = draft();
        d.email = Some("   ".into());
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in the email");
    }

    #[test]
    fn test_invalid_email() {
        let mut d = draft();
        d.email = Some("ana.example.pe".into());
        assert_eq!(d.validate(), Err(ClientError::InvalidEmail));
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last@sub.domain.pe", true)]
    #[case("a@b.", false)]
    #[case("a@.b", false)]
    #[case("@b.co", false)]
    #[case("a@bco", false)]
    #[case("a b@c.de", false)]
    #[case("a@b@c.de", false)]
    fn test_email_format(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: AppError = ClientError::InvalidEmail.into();
        assert_eq!(err.status_code(), 400);
    }
}
