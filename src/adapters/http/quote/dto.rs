//! Request and response DTOs for quote endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{EstimateQuoteResult, SubmitLeadResult};
use crate::domain::dashboard::PROPOSAL_PAGE_PATH;
use crate::domain::foundation::ValidationError;
use crate::domain::pricing::{Platform, PriceBreakdown, QuoteInput, Urgency};
use crate::domain::proposal::{LeadForm, PendingProposal, ProposalError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Quote form as sent by the browser.
///
/// Fields are kept loose so out-of-range values come back as field errors
/// rather than a body rejection. Missing fields take the form's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub urgency: Option<i64>,
    #[serde(default)]
    pub ai_integration: bool,
    #[serde(default)]
    pub project_description: Option<String>,
}

impl QuoteRequest {
    pub fn into_input(self) -> Result<QuoteInput, ProposalError> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let platform = match self.platform.as_deref() {
            None => Platform::default(),
            Some(raw) => raw.parse::<Platform>().unwrap_or_else(|e| {
                errors.push(e);
                Platform::default()
            }),
        };

        let urgency = match self.urgency {
            None => Urgency::NONE,
            Some(raw) => Urgency::try_new(raw).unwrap_or_else(|e| {
                errors.push(e);
                Urgency::NONE
            }),
        };

        if !errors.is_empty() {
            return Err(ProposalError::InvalidQuote(errors));
        }

        Ok(QuoteInput {
            platform,
            urgency,
            ai_integration: self.ai_integration,
            project_description: self.project_description,
        })
    }
}

/// Lead dialog submission together with the quote it was opened from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProposalRequest {
    #[serde(default)]
    pub quote: QuoteRequest,
    #[serde(flatten)]
    pub lead: LeadForm,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub estimate_low: u64,
    pub estimate_high: u64,
    /// e.g. `"$3.4k – $4.6k"`
    pub display: String,
    pub breakdown: PriceBreakdown,
}

impl From<EstimateQuoteResult> for EstimateResponse {
    fn from(result: EstimateQuoteResult) -> Self {
        Self {
            estimate_low: result.breakdown.range.low,
            estimate_high: result.breakdown.range.high,
            display: result.display,
            breakdown: result.breakdown,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProposalResponse {
    pub proposal: PendingProposal,
    pub estimate_display: String,
    pub relay_delivered: bool,
    pub booking_url: String,
    pub proposal_url: String,
}

impl From<SubmitLeadResult> for SubmitProposalResponse {
    fn from(result: SubmitLeadResult) -> Self {
        Self {
            estimate_display: result.proposal.estimate().display(),
            proposal: result.proposal,
            relay_delivered: result.relay_delivered,
            booking_url: result.booking_url,
            proposal_url: PROPOSAL_PAGE_PATH.to_string(),
        }
    }
}
