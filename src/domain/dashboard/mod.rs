pub mod checkout_marker;
pub mod health;
pub mod project;
pub mod view;

pub use checkout_marker::{CheckoutMarker, MarkerObservation};
pub use health::{HealthMetric, SystemHealth};
pub use project::{Milestone, MilestoneStatus, ProjectStatus};
pub use view::{
    DashboardOptions, DashboardState, DashboardView, ProposalSummary, Workspace, DASHBOARD_PATH,
    PROPOSAL_PAGE_PATH,
};
