//! Errors surfaced by application handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::proposal::ProposalError;
use crate::ports::{PaymentError, RelayError, StorageError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Proposal(#[from] ProposalError),

    /// Contact or waitlist form failed validation.
    #[error("Form details are invalid")]
    InvalidForm(Vec<ValidationError>),

    #[error("No pending proposal")]
    ProposalNotFound,

    #[error("Checkout could not be started: {0}")]
    Payment(#[from] PaymentError),

    #[error("Submission could not be delivered: {0}")]
    Relay(#[from] RelayError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl ApplicationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApplicationError::Proposal(e) => e.code(),
            ApplicationError::InvalidForm(_) => ErrorCode::ValidationFailed,
            ApplicationError::ProposalNotFound => ErrorCode::ProposalNotFound,
            ApplicationError::Payment(_) => ErrorCode::PaymentFailed,
            ApplicationError::Relay(_) => ErrorCode::RelayFailed,
            ApplicationError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ApplicationError> for DomainError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Proposal(e) => e.into(),
            ApplicationError::Payment(e) => e.into(),
            ApplicationError::InvalidForm(errors) => {
                let mut domain = DomainError::new(ErrorCode::ValidationFailed, "Form details are invalid");
                for e in errors {
                    domain = domain.with_detail(e.field().to_string(), e.to_string());
                }
                domain
            }
            // Storage details stay in the logs
            ApplicationError::Storage(_) => {
                DomainError::new(ErrorCode::StorageError, "Could not access saved data")
            }
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
