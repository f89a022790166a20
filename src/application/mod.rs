//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Persisted state is reached only through the typed slots in `records`.

mod error;
pub mod handlers;
mod records;

pub use error::ApplicationError;
pub use records::{ClientLocks, ClientRecords, RecordSlot, StoredRecord};

pub use handlers::{
    // Quote
    EstimateQuoteHandler, EstimateQuoteResult, SubmitLeadCommand, SubmitLeadHandler,
    SubmitLeadResult,
    // Proposal
    AcceptProposalCommand, AcceptProposalHandler, CheckoutUrls, CreateCheckoutCommand,
    CreateCheckoutHandler, GetProposalHandler, GetProposalQuery,
    // Dashboard
    ApproveMilestoneCommand, ApproveMilestoneHandler, ApproveMilestoneResult,
    LoadDashboardCommand, LoadDashboardHandler,
    // Inquiry
    JoinWaitlistHandler, SendContactHandler,
};
