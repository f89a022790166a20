//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the studio domain.

mod email;
mod errors;
mod ids;
mod state_machine;

pub use email::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ClientId;
pub use state_machine::StateMachine;
