//! Proposal page handlers.

mod accept_proposal;
mod create_checkout;
mod get_proposal;

pub use accept_proposal::{AcceptProposalCommand, AcceptProposalHandler};
pub use create_checkout::{CheckoutUrls, CreateCheckoutCommand, CreateCheckoutHandler};
pub use get_proposal::{GetProposalHandler, GetProposalQuery};
