//! JSON error responses for the HTTP API.
//!
//! | Error code | HTTP Status |
//! |------------|-------------|
//! | VALIDATION_FAILED | 422 |
//! | CLIENT_ID_REQUIRED | 400 |
//! | PROPOSAL_NOT_FOUND | 404 |
//! | INVALID_STATE_TRANSITION | 409 |
//! | PAYMENT_FAILED, RELAY_FAILED | 502 |
//! | STORAGE_ERROR, INTERNAL_ERROR | 500 |

use std::collections::BTreeMap;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::proposal::ProposalError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Per-field details, when the error has any.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: BTreeMap::new(),
        }
    }
}

/// Error type every handler returns.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn client_id_required() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                "CLIENT_ID_REQUIRED",
                "A valid X-Client-Id header is required",
            ),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ProposalNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::PaymentFailed | ErrorCode::RelayFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self {
            status: status_for(err.code),
            body: ErrorResponse {
                code: err.code.to_string(),
                message: err.message,
                details: err.details.into_iter().collect(),
            },
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if status_for(err.code()).is_server_error() {
            tracing::error!(code = %err.code(), error = %err, "Request failed");
        }
        DomainError::from(err).into()
    }
}

impl From<ProposalError> for ApiError {
    fn from(err: ProposalError) -> Self {
        DomainError::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
