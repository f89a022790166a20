//! Proposal - lead capture, the quote flow state machine and the pending
//! proposal record it produces.

mod document;
mod errors;
mod lead;
mod pending_proposal;
mod quote_flow;

pub use document::{LineItem, ProposalDocument};
pub use errors::ProposalError;
pub use lead::{Lead, LeadForm};
pub use pending_proposal::PendingProposal;
pub use quote_flow::{QuoteFlow, QuoteStage};
