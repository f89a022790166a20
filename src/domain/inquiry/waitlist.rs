//! Waitlist sign-up for a solution that has not launched yet.

use serde::Deserialize;

use crate::domain::foundation::{EmailAddress, ValidationError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub solution_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistSignup {
    pub email: EmailAddress,
    pub solution_title: String,
}

impl WaitlistSignup {
    pub fn from_form(form: &WaitlistForm) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let email = EmailAddress::parse("email", &form.email).map_err(|e| errors.push(e));

        let title = form.solution_title.trim();
        if title.is_empty() {
            errors.push(ValidationError::empty_field("solutionTitle"));
        }

        match email {
            Ok(email) if errors.is_empty() => Ok(Self {
                email,
                solution_title: title.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Subject line the relay files this sign-up under.
    pub fn subject(&self) -> String {
        format!("Waitlist: {}", self.solution_title)
    }
}
