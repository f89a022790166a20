//! GetProposalHandler - Query handler for the proposal page.

use chrono::NaiveDate;

use crate::application::{ApplicationError, ClientRecords};
use crate::domain::foundation::ClientId;
use crate::domain::proposal::ProposalDocument;

#[derive(Debug, Clone)]
pub struct GetProposalQuery {
    pub client_id: ClientId,
    /// Date printed on the document.
    pub today: NaiveDate,
}

/// Reads the pending proposal for display. `None` is the normal empty
/// state, not an error.
pub struct GetProposalHandler {
    records: ClientRecords,
}

impl GetProposalHandler {
    pub fn new(records: ClientRecords) -> Self {
        Self { records }
    }

    pub async fn handle(
        &self,
        query: GetProposalQuery,
    ) -> Result<Option<ProposalDocument>, ApplicationError> {
        let proposal = self.records.proposals.get(&query.client_id).await?;
        Ok(proposal.map(|p| ProposalDocument::render(&p, query.today)))
    }
}
