//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A syntactically valid email address.
///
/// Validation is structural only: one `@`, a non-empty local part and a
/// dotted domain whose last label is at least two characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalises (trims) an email address.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(field, "Valid email required"));
        }

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format(field, "Valid email required"))?;

        let labels: Vec<&str> = domain.split('.').collect();
        let well_formed = !local.is_empty()
            && !domain.contains('@')
            && labels.len() >= 2
            && labels.iter().all(|l| !l.is_empty())
            && labels.last().map_or(false, |tld| tld.len() >= 2);

        if !well_formed {
            return Err(ValidationError::invalid_format(field, "Valid email required"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("email", &value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for raw in ["you@company.com", "a.b+tag@sub.example.co", "  x@y.io "] {
            assert!(EmailAddress::parse("email", raw).is_ok(), "{raw}");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let email = EmailAddress::parse("email", "  you@company.com ").unwrap();
        assert_eq!(email.as_str(), "you@company.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "plainaddress",
            "@example.com",
            "you@",
            "you@localhost",
            "you@example.c",
            "you@@example.com",
            "you@exa mple.com",
            "you@example..com",
        ] {
            assert!(EmailAddress::parse("email", raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn empty_input_is_an_empty_field_error() {
        let err = EmailAddress::parse("email", "   ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<EmailAddress>("\"nope\"").is_err());
        let ok: EmailAddress = serde_json::from_str("\"a@b.io\"").unwrap();
        assert_eq!(ok.as_str(), "a@b.io");
    }
}
