//! Dashboard read model: the proposal card, the workspace widgets, and the
//! rule for which of them a load shows.

use serde::Serialize;

use crate::domain::proposal::PendingProposal;

use super::{Milestone, ProjectStatus, SystemHealth};

/// Where the dashboard links for the full proposal.
pub const PROPOSAL_PAGE_PATH: &str = "/dashboard/proposal";

/// Path the client should show once the payment marker has been consumed.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Options that shape the dashboard without changing stored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Hide the ordinary widgets while a proposal is waiting for review.
    pub suppress_when_proposal_pending: bool,
    pub live_preview_url: Option<String>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            suppress_when_proposal_pending: true,
            live_preview_url: None,
        }
    }
}

/// "Proposal ready" card linking into the proposal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    pub client_name: String,
    pub project_type_label: String,
    pub estimate_display: String,
    pub proposal_url: String,
}

impl ProposalSummary {
    pub fn from_proposal(proposal: &PendingProposal) -> Self {
        Self {
            client_name: proposal.name.clone(),
            project_type_label: proposal.project_type_label.clone(),
            estimate_display: proposal.estimate().display(),
            proposal_url: PROPOSAL_PAGE_PATH.to_string(),
        }
    }
}

/// The ordinary dashboard widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub project_status: ProjectStatus,
    pub system_health: SystemHealth,
    pub milestone: Milestone,
    /// `None` renders the "preview not deployed yet" placeholder.
    pub live_preview_url: Option<String>,
}

/// Everything the dashboard page renders for one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// True only on the load that consumed the payment marker.
    pub payment_success: bool,
    /// Set when the client must replace its URL to drop the marker.
    pub canonical_url: Option<String>,
    pub pending_proposal: Option<ProposalSummary>,
    pub workspace: Option<Workspace>,
}

/// Inputs gathered by the dashboard loader, after any marker side effects.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub pending_proposal: Option<PendingProposal>,
    pub project_status: ProjectStatus,
    pub milestone: Milestone,
    pub payment_success: bool,
    pub marker_present: bool,
}

impl DashboardView {
    pub fn compose(state: DashboardState, options: &DashboardOptions) -> Self {
        let pending_proposal = state
            .pending_proposal
            .as_ref()
            .map(ProposalSummary::from_proposal);

        let suppressed = pending_proposal.is_some() && options.suppress_when_proposal_pending;
        let workspace = (!suppressed).then(|| Workspace {
            project_status: state.project_status,
            system_health: SystemHealth::placeholder(),
            milestone: state.milestone,
            live_preview_url: options.live_preview_url.clone(),
        });

        Self {
            payment_success: state.payment_success,
            canonical_url: state.marker_present.then(|| DASHBOARD_PATH.to_string()),
            pending_proposal,
            workspace,
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
