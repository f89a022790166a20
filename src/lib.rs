//! Studio Desk - quote calculator, proposal hand-off and client dashboard
//! backend for a creative-technology studio.
//!
//! A visitor prices a project in the quote calculator, leaves contact
//! details to receive a pending proposal, accepts it through a hosted
//! deposit checkout, and lands on a dashboard that consumes the one-shot
//! "payment completed" marker.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
