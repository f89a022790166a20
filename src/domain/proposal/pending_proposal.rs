//! PendingProposal - the one persisted draft estimate per client.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, ValidationError};
use crate::domain::pricing::{EstimateRange, Platform, QuoteInput, Urgency};

use super::Lead;

/// Frozen snapshot of a lead and quote awaiting acceptance.
///
/// Serialized field names are camelCase; this is the exact shape stored
/// under the client's `pending_proposal` key. The estimate is captured at
/// submission time and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingProposal {
    pub name: String,
    pub email: EmailAddress,
    pub platform: Platform,
    pub urgency: Urgency,
    pub ai_integration: bool,
    #[serde(default)]
    pub project_description: String,
    pub estimate_low: u64,
    pub estimate_high: u64,
    pub project_type_label: String,
}

impl PendingProposal {
    /// Assembles a proposal from a validated lead, the frozen quote snapshot
    /// and the estimate computed from that snapshot.
    pub fn assemble(lead: &Lead, quote: &QuoteInput, estimate: EstimateRange) -> Self {
        Self {
            name: lead.name().to_string(),
            email: lead.email().clone(),
            platform: quote.platform,
            urgency: quote.urgency,
            ai_integration: quote.ai_integration,
            project_description: quote.project_description.clone().unwrap_or_default(),
            estimate_low: estimate.low,
            estimate_high: estimate.high,
            project_type_label: quote.platform.project_type_label().to_string(),
        }
    }

    pub fn estimate(&self) -> EstimateRange {
        EstimateRange {
            low: self.estimate_low,
            high: self.estimate_high,
        }
    }

    /// Semantic checks beyond what deserialization already guarantees.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.project_type_label.trim().is_empty() {
            return Err(ValidationError::empty_field("projectTypeLabel"));
        }
        if self.estimate_low > self.estimate_high {
            return Err(ValidationError::invalid_format(
                "estimateLow",
                "estimate low exceeds estimate high",
            ));
        }
        Ok(())
    }
}
