//! SubmitLeadHandler - Command handler for turning a quote and lead into a
//! pending proposal.

use std::sync::Arc;

use crate::application::{ApplicationError, ClientRecords};
use crate::domain::foundation::ClientId;
use crate::domain::pricing::{PricingTable, QuoteInput};
use crate::domain::proposal::{LeadForm, PendingProposal, QuoteFlow};
use crate::ports::{FormSubmission, LeadRelay};

/// Command to submit the lead dialog for a quote.
#[derive(Debug, Clone)]
pub struct SubmitLeadCommand {
    pub client_id: ClientId,
    /// Quote snapshot taken when the visitor asked for a proposal.
    pub quote: QuoteInput,
    pub lead: LeadForm,
}

#[derive(Debug, Clone)]
pub struct SubmitLeadResult {
    pub proposal: PendingProposal,
    /// Whether the studio inbox received the lead.
    pub relay_delivered: bool,
    /// Where to book the follow-up strategy call.
    pub booking_url: String,
}

/// Handler for lead submission.
///
/// The proposal is persisted before the relay is attempted; a relay failure
/// is reported but never undoes the proposal.
pub struct SubmitLeadHandler {
    pricing: PricingTable,
    records: ClientRecords,
    relay: Arc<dyn LeadRelay>,
    booking_url: String,
}

impl SubmitLeadHandler {
    pub fn new(
        pricing: PricingTable,
        records: ClientRecords,
        relay: Arc<dyn LeadRelay>,
        booking_url: impl Into<String>,
    ) -> Self {
        Self {
            pricing,
            records,
            relay,
            booking_url: booking_url.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitLeadCommand,
    ) -> Result<SubmitLeadResult, ApplicationError> {
        // 1. Walk the flow: freeze the quote, validate the lead, assemble
        let mut flow = QuoteFlow::with_input(self.pricing.clone(), cmd.quote);
        flow.request_proposal()?;
        let proposal = flow.submit_lead(&cmd.lead)?;

        // 2. Persist, replacing any earlier proposal
        self.records.proposals.set(&cmd.client_id, &proposal).await?;

        tracing::info!(
            client_id = %cmd.client_id,
            project_type = %proposal.project_type_label,
            estimate_low = proposal.estimate_low,
            estimate_high = proposal.estimate_high,
            "Pending proposal saved"
        );

        // 3. Relay to the studio inbox
        let relay_delivered = match self
            .relay
            .submit(&FormSubmission::Lead(proposal.clone()))
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(client_id = %cmd.client_id, error = %e, "Lead relay failed");
                false
            }
        };

        Ok(SubmitLeadResult {
            proposal,
            relay_delivered,
            booking_url: self.booking_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::relay::MockLeadRelay;
    use crate::adapters::storage::InMemoryClientStorage;
    use crate::domain::pricing::Platform;
    use crate::domain::proposal::ProposalError;

    fn setup(relay: MockLeadRelay) -> (SubmitLeadHandler, ClientRecords) {
        let records = ClientRecords::new(Arc::new(InMemoryClientStorage::new()));
        let handler = SubmitLeadHandler::new(
            PricingTable::default(),
            records.clone(),
            Arc::new(relay),
            "https://calendly.com",
        );
        (handler, records)
    }

    fn command(client_id: ClientId, name: &str, email: &str) -> SubmitLeadCommand {
        SubmitLeadCommand {
            client_id,
            quote: QuoteInput {
                platform: Platform::Web,
                ..Default::default()
            },
            lead: LeadForm {
                name: name.to_string(),
                email: email.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn persists_and_relays_proposal() {
        let relay = MockLeadRelay::new();
        let (handler, records) = setup(relay.clone());
        let client = ClientId::new();

        let result = handler
            .handle(command(client, "Ada", "ada@engine.org"))
            .await
            .unwrap();

        assert_eq!(result.proposal.estimate_low, 3400);
        assert_eq!(result.proposal.estimate_high, 4600);
        assert!(result.relay_delivered);
        assert_eq!(result.booking_url, "https://calendly.com");

        let stored = records.proposals.get(&client).await.unwrap();
        assert_eq!(stored, Some(result.proposal));
        assert_eq!(relay.submissions().len(), 1);
    }

    #[tokio::test]
    async fn relay_failure_still_persists() {
        let (handler, records) = setup(MockLeadRelay::rejecting(500));
        let client = ClientId::new();

        let result = handler
            .handle(command(client, "Ada", "ada@engine.org"))
            .await
            .unwrap();

        assert!(!result.relay_delivered);
        assert!(records.proposals.get(&client).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_lead_persists_nothing() {
        let relay = MockLeadRelay::new();
        let (handler, records) = setup(relay.clone());
        let client = ClientId::new();

        let err = handler
            .handle(command(client, "", "nope"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Proposal(ProposalError::InvalidLead(_))
        ));
        assert!(records.proposals.get(&client).await.unwrap().is_none());
        assert!(relay.submissions().is_empty());
    }

    #[tokio::test]
    async fn new_submission_overwrites_previous() {
        let (handler, records) = setup(MockLeadRelay::new());
        let client = ClientId::new();

        handler
            .handle(command(client, "Ada", "ada@engine.org"))
            .await
            .unwrap();
        handler
            .handle(command(client, "Grace", "grace@navy.mil"))
            .await
            .unwrap();

        let stored = records.proposals.get(&client).await.unwrap().unwrap();
        assert_eq!(stored.name, "Grace");
    }
}
