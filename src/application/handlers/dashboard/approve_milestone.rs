//! ApproveMilestoneHandler - Command handler for milestone sign-off.

use crate::application::{ApplicationError, ClientRecords};
use crate::domain::dashboard::Milestone;
use crate::domain::foundation::ClientId;

#[derive(Debug, Clone)]
pub struct ApproveMilestoneCommand {
    pub client_id: ClientId,
}

#[derive(Debug, Clone)]
pub struct ApproveMilestoneResult {
    pub milestone: Milestone,
    /// False when the milestone was already completed.
    pub changed: bool,
}

pub struct ApproveMilestoneHandler {
    records: ClientRecords,
}

impl ApproveMilestoneHandler {
    pub fn new(records: ClientRecords) -> Self {
        Self { records }
    }

    pub async fn handle(
        &self,
        cmd: ApproveMilestoneCommand,
    ) -> Result<ApproveMilestoneResult, ApplicationError> {
        let mut milestone = self.records.milestones.get_or_default(&cmd.client_id).await?;

        let changed = milestone.approve();
        if changed {
            self.records.milestones.set(&cmd.client_id, &milestone).await?;
            tracing::info!(client_id = %cmd.client_id, title = %milestone.title, "Milestone approved");
        }

        Ok(ApproveMilestoneResult { milestone, changed })
    }
}
