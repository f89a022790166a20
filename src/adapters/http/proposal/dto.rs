//! Request and response DTOs for proposal and checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::proposal::{LineItem, ProposalDocument};
use crate::ports::CheckoutSession;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/checkout`.
///
/// `projectType` is read leniently: anything other than a string falls back
/// to the default project type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub project_type: Option<serde_json::Value>,
}

impl CheckoutRequest {
    pub fn project_type(&self) -> Option<String> {
        self.project_type
            .as_ref()
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    pub item: String,
    pub notes: String,
}

impl From<LineItem> for LineItemResponse {
    fn from(line: LineItem) -> Self {
        Self {
            item: line.item,
            notes: line.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDocumentResponse {
    pub prepared_on: String,
    pub client_name: String,
    pub client_email: String,
    pub project_type: String,
    pub line_items: Vec<LineItemResponse>,
    pub estimate_low: u64,
    pub estimate_high: u64,
    pub total_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
}

impl From<ProposalDocument> for ProposalDocumentResponse {
    fn from(doc: ProposalDocument) -> Self {
        Self {
            prepared_on: doc.prepared_on,
            client_name: doc.client_name,
            client_email: doc.client_email,
            project_type: doc.project_type,
            line_items: doc.line_items.into_iter().map(Into::into).collect(),
            estimate_low: doc.estimate_low,
            estimate_high: doc.estimate_high,
            total_display: doc.total_display,
            project_description: doc.project_description,
        }
    }
}

/// `proposal` is null when nothing is pending.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalPageResponse {
    pub proposal: Option<ProposalDocumentResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
    pub expires_at: i64,
}

impl From<CheckoutSession> for CheckoutResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            session_id: session.id,
            url: session.url,
            expires_at: session.expires_at,
        }
    }
}

/// Error body of `POST /api/checkout`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutErrorResponse {
    pub error: String,
}
