//! AcceptProposalHandler - Command handler for the proposal page's
//! "accept" action.

use crate::application::{ApplicationError, ClientRecords};
use crate::domain::foundation::ClientId;
use crate::ports::CheckoutSession;

use super::{CreateCheckoutCommand, CreateCheckoutHandler};

#[derive(Debug, Clone)]
pub struct AcceptProposalCommand {
    pub client_id: ClientId,
}

/// Hands the pending proposal's project type to checkout. The proposal
/// itself stays stored until the payment marker is observed.
pub struct AcceptProposalHandler {
    records: ClientRecords,
    checkout: CreateCheckoutHandler,
}

impl AcceptProposalHandler {
    pub fn new(records: ClientRecords, checkout: CreateCheckoutHandler) -> Self {
        Self { records, checkout }
    }

    pub async fn handle(
        &self,
        cmd: AcceptProposalCommand,
    ) -> Result<CheckoutSession, ApplicationError> {
        let proposal = self
            .records
            .proposals
            .get(&cmd.client_id)
            .await?
            .ok_or(ApplicationError::ProposalNotFound)?;

        self.checkout
            .handle(CreateCheckoutCommand {
                client_id: Some(cmd.client_id),
                project_type: Some(proposal.project_type_label),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryClientStorage;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::application::handlers::proposal::CheckoutUrls;
    use crate::domain::proposal::{LeadForm, QuoteFlow};
    use std::sync::Arc;

    fn setup() -> (AcceptProposalHandler, MockPaymentProvider, ClientRecords) {
        let payment = MockPaymentProvider::new();
        let records = ClientRecords::new(Arc::new(InMemoryClientStorage::new()));
        let checkout = CreateCheckoutHandler::new(
            Arc::new(payment.clone()),
            records.clone(),
            CheckoutUrls::from_base("http://localhost:3000"),
        );
        (
            AcceptProposalHandler::new(records.clone(), checkout),
            payment,
            records,
        )
    }

    #[tokio::test]
    async fn without_proposal_is_not_found() {
        let (handler, payment, _) = setup();
        let err = handler
            .handle(AcceptProposalCommand {
                client_id: ClientId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ProposalNotFound));
        assert!(!payment.was_called());
    }

    #[tokio::test]
    async fn passes_project_type_label_to_checkout() {
        let (handler, payment, records) = setup();
        let client = ClientId::new();

        let mut flow = QuoteFlow::default();
        flow.request_proposal().unwrap();
        let proposal = flow
            .submit_lead(&LeadForm {
                name: "Ada".to_string(),
                email: "ada@engine.org".to_string(),
            })
            .unwrap();
        records.proposals.set(&client, &proposal).await.unwrap();

        let session = handler
            .handle(AcceptProposalCommand { client_id: client })
            .await
            .unwrap();

        assert_eq!(session.url, "http://localhost:3000/dashboard?payment=success");
        let request = &payment.requests()[0];
        assert_eq!(request.project_type, "Web App");
        assert_eq!(request.client_id, Some(client));
        // Proposal survives until payment is confirmed
        assert!(records.proposals.get(&client).await.unwrap().is_some());
    }
}
