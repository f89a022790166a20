//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod inquiry;
pub mod proposal;
pub mod quote;

pub use dashboard::{
    ApproveMilestoneCommand, ApproveMilestoneHandler, ApproveMilestoneResult,
    LoadDashboardCommand, LoadDashboardHandler,
};
pub use inquiry::{JoinWaitlistHandler, SendContactHandler};
pub use proposal::{
    AcceptProposalCommand, AcceptProposalHandler, CheckoutUrls, CreateCheckoutCommand,
    CreateCheckoutHandler, GetProposalHandler, GetProposalQuery,
};
pub use quote::{
    EstimateQuoteHandler, EstimateQuoteResult, SubmitLeadCommand, SubmitLeadHandler,
    SubmitLeadResult,
};
