//! LeadRelay port - fire-and-forget delivery of form submissions to the
//! studio's inbox.
//!
//! Delivery outcome only drives user feedback. Nothing is queued or retried
//! when it fails.

use async_trait::async_trait;

use crate::domain::inquiry::{ContactMessage, WaitlistSignup};
use crate::domain::proposal::PendingProposal;

/// Errors from relaying a submission
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Relay endpoint unreachable: {0}")]
    Network(String),

    #[error("Relay endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// A form submission bound for the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    /// A lead captured by the quote flow, with its frozen estimate.
    Lead(PendingProposal),
    Contact(ContactMessage),
    Waitlist(WaitlistSignup),
}

impl FormSubmission {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FormSubmission::Lead(_) => "lead",
            FormSubmission::Contact(_) => "contact",
            FormSubmission::Waitlist(_) => "waitlist",
        }
    }

    pub fn subject(&self) -> String {
        match self {
            FormSubmission::Lead(p) => format!("New Proposal: {}", p.project_type_label),
            FormSubmission::Contact(c) => format!("New Inquiry: {}", c.project_type),
            FormSubmission::Waitlist(w) => w.subject(),
        }
    }

    /// Form-encoded field pairs, `_subject` first.
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("_subject".to_string(), self.subject())];
        let mut push = |k: &str, v: String| fields.push((k.to_string(), v));

        match self {
            FormSubmission::Lead(p) => {
                push("name", p.name.clone());
                push("email", p.email.to_string());
                push("project_type", p.project_type_label.clone());
                push("platform", p.platform.to_string());
                push("urgency", p.urgency.value().to_string());
                push("ai_integration", p.ai_integration.to_string());
                push("estimate", p.estimate().display());
                if !p.project_description.trim().is_empty() {
                    push("message", p.project_description.trim().to_string());
                }
            }
            FormSubmission::Contact(c) => {
                push("name", c.name.clone());
                push("email", c.email.to_string());
                push("project_type", c.project_type.to_string());
                push("message", c.message.clone());
            }
            FormSubmission::Waitlist(w) => {
                push("email", w.email.to_string());
            }
        }
        fields
    }
}

/// Port for the external form relay
#[async_trait]
pub trait LeadRelay: Send + Sync {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), RelayError>;
}
