//! Lead - contact details captured before revealing the final estimate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, ValidationError};

/// Raw lead form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A validated lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    name: String,
    email: EmailAddress,
}

impl Lead {
    /// Validates a lead form, collecting every field error at once so the
    /// dialog can show them inline.
    pub fn from_form(form: &LeadForm) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = form.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::empty_field("name"));
        }

        let email = match EmailAddress::parse("email", &form.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match email {
            Some(email) if errors.is_empty() => Ok(Self {
                name: name.to_string(),
                email,
            }),
            _ => Err(errors),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
