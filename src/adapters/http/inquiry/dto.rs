//! Response DTOs for inquiry endpoints. Requests deserialize straight into
//! the domain forms.

use serde::Serialize;

use crate::domain::inquiry::{ContactMessage, WaitlistSignup};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub delivered: bool,
    pub project_type: String,
}

impl From<ContactMessage> for ContactResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            delivered: true,
            project_type: message.project_type.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistResponse {
    pub delivered: bool,
    pub solution_title: String,
}

impl From<WaitlistSignup> for WaitlistResponse {
    fn from(signup: WaitlistSignup) -> Self {
        Self {
            delivered: true,
            solution_title: signup.solution_title,
        }
    }
}
