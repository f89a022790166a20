//! LoadDashboardHandler - Builds the dashboard and consumes the
//! "payment completed" marker.
//!
//! The marker's side effects (clear the proposal, activate the project) run
//! only on the sighting that moves the stored `CheckoutMarker` from
//! `NotYetProcessed` to `Processed`. Reloads and back-navigation that carry
//! the marker again see `Processed` and change nothing. Concurrent loads for
//! one client are serialised on the client's lock, so only one of them can
//! make that move.

use crate::application::{ApplicationError, ClientRecords};
use crate::domain::dashboard::{
    DashboardOptions, DashboardState, DashboardView, MarkerObservation, ProjectStatus,
};
use crate::domain::foundation::ClientId;

#[derive(Debug, Clone)]
pub struct LoadDashboardCommand {
    pub client_id: ClientId,
    /// True when the request carried `payment=success`.
    pub payment_marker: bool,
}

pub struct LoadDashboardHandler {
    records: ClientRecords,
    options: DashboardOptions,
}

impl LoadDashboardHandler {
    pub fn new(records: ClientRecords, options: DashboardOptions) -> Self {
        Self { records, options }
    }

    pub async fn handle(&self, cmd: LoadDashboardCommand) -> Result<DashboardView, ApplicationError> {
        let client = &cmd.client_id;

        // 1. Consume the payment marker at most once
        let payment_success = if cmd.payment_marker {
            self.observe_payment_success(client).await?
        } else {
            false
        };

        // 2. Read current state
        let pending_proposal = self.records.proposals.get(client).await?;
        let project_status = self.records.project_statuses.get_or_default(client).await?;
        let milestone = self.records.milestones.get_or_default(client).await?;

        // 3. Compose
        Ok(DashboardView::compose(
            DashboardState {
                pending_proposal,
                project_status,
                milestone,
                payment_success,
                marker_present: cmd.payment_marker,
            },
            &self.options,
        ))
    }

    async fn observe_payment_success(&self, client: &ClientId) -> Result<bool, ApplicationError> {
        let _guard = self.records.locks.lock(client).await;
        let marker = self.records.checkout_markers.get_or_default(client).await?;
        let (next, observation) = marker.observe_success();

        match observation {
            MarkerObservation::FirstSighting => {
                self.records.proposals.clear(client).await?;
                self.records
                    .project_statuses
                    .set(client, &ProjectStatus::Active)
                    .await?;
                // Marker last, so a failure above is retried on the next load
                self.records.checkout_markers.set(client, &next).await?;

                tracing::info!(client_id = %client, "Payment success processed");
                Ok(true)
            }
            MarkerObservation::AlreadyProcessed => {
                tracing::debug!(client_id = %client, "Payment marker already processed");
                Ok(false)
            }
        }
    }
}
