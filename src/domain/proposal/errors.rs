//! Proposal flow error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidLead | 422 |
//! | InvalidQuote | 422 |
//! | InvalidState | 409 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    /// Lead form failed validation; every offending field is listed.
    #[error("Lead details are invalid")]
    InvalidLead(Vec<ValidationError>),

    /// Quote form failed validation at the input boundary.
    #[error("Quote details are invalid")]
    InvalidQuote(Vec<ValidationError>),

    /// The requested step is not available in the current flow stage.
    #[error("Cannot {attempted} while {current}")]
    InvalidState {
        current: &'static str,
        attempted: &'static str,
    },
}

impl ProposalError {
    pub fn invalid_state(current: &'static str, attempted: &'static str) -> Self {
        ProposalError::InvalidState { current, attempted }
    }

    /// Field errors carried by validation failures.
    pub fn field_errors(&self) -> &[ValidationError] {
        match self {
            ProposalError::InvalidLead(errors) | ProposalError::InvalidQuote(errors) => errors,
            ProposalError::InvalidState { .. } => &[],
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProposalError::InvalidLead(_) | ProposalError::InvalidQuote(_) => {
                ErrorCode::ValidationFailed
            }
            ProposalError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<ProposalError> for DomainError {
    fn from(err: ProposalError) -> Self {
        let mut domain = DomainError::new(err.code(), err.to_string());
        for field_error in err.field_errors() {
            domain = domain.with_detail(field_error.field(), field_error.to_string());
        }
        domain
    }
}
