//! Dashboard handlers.

mod approve_milestone;
mod load_dashboard;

pub use approve_milestone::{
    ApproveMilestoneCommand, ApproveMilestoneHandler, ApproveMilestoneResult,
};
pub use load_dashboard::{LoadDashboardCommand, LoadDashboardHandler};
