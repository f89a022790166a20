//! HTTP handlers for proposal and checkout endpoints.

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use crate::adapters::http::error::{status_for, ApiError};
use crate::adapters::http::extract::ClientIdentity;
use crate::adapters::http::state::AppState;
use crate::application::{AcceptProposalCommand, CreateCheckoutCommand, GetProposalQuery};

use super::dto::{
    CheckoutErrorResponse, CheckoutRequest, CheckoutResponse, ProposalDocumentResponse,
    ProposalPageResponse,
};

/// GET /api/proposal - Render the pending proposal
pub async fn get_proposal(
    State(state): State<AppState>,
    ClientIdentity(client_id): ClientIdentity,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetProposalQuery {
        client_id,
        today: Utc::now().date_naive(),
    };

    let document = state.get_proposal_handler().handle(query).await?;

    Ok(Json(ProposalPageResponse {
        proposal: document.map(ProposalDocumentResponse::from),
    }))
}

/// POST /api/proposal/accept - Start checkout for the pending proposal
pub async fn accept_proposal(
    State(state): State<AppState>,
    ClientIdentity(client_id): ClientIdentity,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .accept_proposal_handler()
        .handle(AcceptProposalCommand { client_id })
        .await?;

    Ok(Json(CheckoutResponse::from(session)))
}

/// POST /api/checkout - Start checkout for an explicit project type
///
/// The client id is optional here; when present it is attached to the
/// session metadata and its payment marker is re-armed.
pub async fn create_checkout(
    State(state): State<AppState>,
    client: Option<ClientIdentity>,
    Json(request): Json<CheckoutRequest>,
) -> Response {
    let command = CreateCheckoutCommand {
        client_id: client.map(|c| c.0),
        project_type: request.project_type(),
    };

    match state.create_checkout_handler().handle(command).await {
        Ok(session) => Json(CheckoutResponse::from(session)).into_response(),
        Err(err) => {
            let status = status_for(err.code());
            tracing::error!(error = %err, "Checkout request failed");
            (
                status,
                Json(CheckoutErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
