//! Quote handlers.

mod estimate_quote;
mod submit_lead;

pub use estimate_quote::{EstimateQuoteHandler, EstimateQuoteResult};
pub use submit_lead::{SubmitLeadCommand, SubmitLeadHandler, SubmitLeadResult};
