//! Quote flow state machine.
//!
//! ```text
//! CollectingQuote ──request_proposal──▶ CapturingLead ──submit_lead──▶ ProposalReady
//!        ▲                                   │                              │
//!        └──────────────cancel───────────────┴─────────────cancel──────────┘
//! ```
//!
//! Requesting a proposal freezes a snapshot of the form. Edits made while the
//! lead dialog is open change the live form only; the proposal is priced from
//! the snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::pricing::{EstimateRange, PricingTable, QuoteInput};

use super::{Lead, LeadForm, PendingProposal, ProposalError};

/// Coarse stage of the flow, used to validate transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStage {
    CollectingQuote,
    CapturingLead,
    ProposalReady,
}

impl QuoteStage {
    fn describe(&self) -> &'static str {
        match self {
            QuoteStage::CollectingQuote => "collecting quote",
            QuoteStage::CapturingLead => "capturing lead",
            QuoteStage::ProposalReady => "proposal ready",
        }
    }
}

impl StateMachine for QuoteStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuoteStage::*;
        matches!(
            (self, target),
            (CollectingQuote, CapturingLead)
                | (CapturingLead, ProposalReady)
                | (CapturingLead, CollectingQuote)
                | (ProposalReady, CollectingQuote)
                // Start over straight from the result dialog
                | (ProposalReady, CapturingLead)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuoteStage::*;
        match self {
            CollectingQuote => vec![CapturingLead],
            CapturingLead => vec![ProposalReady, CollectingQuote],
            ProposalReady => vec![CollectingQuote, CapturingLead],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FlowState {
    CollectingQuote,
    CapturingLead { snapshot: QuoteInput },
    ProposalReady { proposal: PendingProposal },
}

/// One visitor's pass through quote → lead → proposal.
#[derive(Debug, Clone)]
pub struct QuoteFlow {
    pricing: PricingTable,
    input: QuoteInput,
    state: FlowState,
}

impl QuoteFlow {
    pub fn new(pricing: PricingTable) -> Self {
        Self::with_input(pricing, QuoteInput::default())
    }

    pub fn with_input(pricing: PricingTable, input: QuoteInput) -> Self {
        Self {
            pricing,
            input,
            state: FlowState::CollectingQuote,
        }
    }

    pub fn stage(&self) -> QuoteStage {
        match self.state {
            FlowState::CollectingQuote => QuoteStage::CollectingQuote,
            FlowState::CapturingLead { .. } => QuoteStage::CapturingLead,
            FlowState::ProposalReady { .. } => QuoteStage::ProposalReady,
        }
    }

    /// Live form values.
    pub fn input(&self) -> &QuoteInput {
        &self.input
    }

    /// Replaces the live form values. Never touches a frozen snapshot.
    pub fn update_input(&mut self, input: QuoteInput) {
        self.input = input;
    }

    /// Estimate for the live form, recomputed on every call.
    pub fn live_estimate(&self) -> EstimateRange {
        self.pricing.estimate(&self.input)
    }

    /// The snapshot being priced while the lead dialog is open.
    pub fn snapshot(&self) -> Option<&QuoteInput> {
        match &self.state {
            FlowState::CapturingLead { snapshot } => Some(snapshot),
            _ => None,
        }
    }

    pub fn proposal(&self) -> Option<&PendingProposal> {
        match &self.state {
            FlowState::ProposalReady { proposal } => Some(proposal),
            _ => None,
        }
    }

    /// "Get proposal": freeze the current form and open the lead dialog.
    pub fn request_proposal(&mut self) -> Result<(), ProposalError> {
        self.advance(QuoteStage::CapturingLead, "request a proposal")?;
        self.state = FlowState::CapturingLead {
            snapshot: self.input.clone(),
        };
        Ok(())
    }

    /// Submits the lead form. On success the flow holds the assembled
    /// proposal, priced from the frozen snapshot; on validation failure the
    /// flow stays in the lead dialog.
    pub fn submit_lead(&mut self, form: &LeadForm) -> Result<PendingProposal, ProposalError> {
        let snapshot = match &self.state {
            FlowState::CapturingLead { snapshot } => snapshot,
            _ => {
                return Err(ProposalError::invalid_state(
                    self.stage().describe(),
                    "submit a lead",
                ))
            }
        };

        let lead = Lead::from_form(form).map_err(ProposalError::InvalidLead)?;
        let estimate = self.pricing.estimate(snapshot);
        let proposal = PendingProposal::assemble(&lead, snapshot, estimate);

        self.state = FlowState::ProposalReady {
            proposal: proposal.clone(),
        };
        Ok(proposal)
    }

    /// Closes the lead dialog. Nothing is persisted by cancelling.
    pub fn cancel(&mut self) {
        if self.stage() != QuoteStage::CollectingQuote {
            self.state = FlowState::CollectingQuote;
        }
    }

    fn advance(&self, target: QuoteStage, attempted: &'static str) -> Result<(), ProposalError> {
        self.stage()
            .transition_to(target)
            .map(|_| ())
            .map_err(|_| ProposalError::invalid_state(self.stage().describe(), attempted))
    }
}

impl Default for QuoteFlow {
    fn default() -> Self {
        Self::new(PricingTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{Platform, Urgency};

    fn lead_form() -> LeadForm {
        LeadForm {
            name: "Linus".to_string(),
            email: "linus@kernel.org".to_string(),
        }
    }

    fn web_quote() -> QuoteInput {
        QuoteInput {
            platform: Platform::Web,
            ..Default::default()
        }
    }

    #[test]
    fn starts_collecting_with_live_estimate() {
        let flow = QuoteFlow::with_input(PricingTable::default(), web_quote());
        assert_eq!(flow.stage(), QuoteStage::CollectingQuote);
        assert_eq!(flow.live_estimate(), EstimateRange { low: 3400, high: 4600 });
    }

    #[test]
    fn live_estimate_follows_edits() {
        let mut flow = QuoteFlow::default();
        let before = flow.live_estimate();
        flow.update_input(QuoteInput {
            ai_integration: true,
            ..web_quote()
        });
        assert!(flow.live_estimate().low > before.low);
    }

    #[test]
    fn happy_path_reaches_proposal_ready() {
        let mut flow = QuoteFlow::with_input(PricingTable::default(), web_quote());
        flow.request_proposal().unwrap();
        assert_eq!(flow.stage(), QuoteStage::CapturingLead);

        let proposal = flow.submit_lead(&lead_form()).unwrap();
        assert_eq!(flow.stage(), QuoteStage::ProposalReady);
        assert_eq!(proposal.estimate_low, 3400);
        assert_eq!(proposal.estimate_high, 4600);
        assert_eq!(flow.proposal(), Some(&proposal));
    }

    #[test]
    fn edits_after_request_do_not_change_the_snapshot() {
        let mut flow = QuoteFlow::with_input(PricingTable::default(), web_quote());
        flow.request_proposal().unwrap();

        flow.update_input(QuoteInput {
            platform: Platform::Ai,
            urgency: Urgency::MAX,
            ai_integration: true,
            project_description: None,
        });

        assert_eq!(flow.snapshot(), Some(&web_quote()));
        let proposal = flow.submit_lead(&lead_form()).unwrap();
        assert_eq!(proposal.platform, Platform::Web);
        assert_eq!(proposal.estimate_low, 3400);
    }

    #[test]
    fn invalid_lead_keeps_dialog_open() {
        let mut flow = QuoteFlow::default();
        flow.request_proposal().unwrap();

        let err = flow
            .submit_lead(&LeadForm {
                name: String::new(),
                email: "broken".to_string(),
            })
            .unwrap_err();

        assert_eq!(err.field_errors().len(), 2);
        assert_eq!(flow.stage(), QuoteStage::CapturingLead);
        assert!(flow.proposal().is_none());
    }

    #[test]
    fn cancel_returns_to_collecting_without_proposal() {
        let mut flow = QuoteFlow::default();
        flow.request_proposal().unwrap();
        flow.cancel();
        assert_eq!(flow.stage(), QuoteStage::CollectingQuote);
        assert!(flow.snapshot().is_none());
        assert!(flow.proposal().is_none());
    }

    #[test]
    fn submitting_lead_without_request_is_rejected() {
        let mut flow = QuoteFlow::default();
        let err = flow.submit_lead(&lead_form()).unwrap_err();
        assert!(matches!(err, ProposalError::InvalidState { .. }));
    }

    #[test]
    fn requesting_twice_while_dialog_open_is_rejected() {
        let mut flow = QuoteFlow::default();
        flow.request_proposal().unwrap();
        assert!(flow.request_proposal().is_err());
    }

    #[test]
    fn can_start_over_from_proposal_ready() {
        let mut flow = QuoteFlow::default();
        flow.request_proposal().unwrap();
        flow.submit_lead(&lead_form()).unwrap();
        flow.request_proposal().unwrap();
        assert_eq!(flow.stage(), QuoteStage::CapturingLead);
    }

    #[test]
    fn stage_transitions_are_consistent() {
        for stage in [
            QuoteStage::CollectingQuote,
            QuoteStage::CapturingLead,
            QuoteStage::ProposalReady,
        ] {
            for target in stage.valid_transitions() {
                assert!(stage.can_transition_to(&target));
            }
        }
    }
}
