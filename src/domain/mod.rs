//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `pricing` - Rate card and estimate formula for the quote calculator
//! - `proposal` - Quote flow state machine, lead capture and pending proposal
//! - `dashboard` - Checkout marker guard, project status, milestone and view
//! - `inquiry` - Contact and waitlist forms

pub mod dashboard;
pub mod foundation;
pub mod inquiry;
pub mod pricing;
pub mod proposal;
