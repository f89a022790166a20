//! HTTP handlers for quote endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ClientIdentity;
use crate::adapters::http::state::AppState;
use crate::application::SubmitLeadCommand;

use super::dto::{EstimateResponse, QuoteRequest, SubmitProposalRequest, SubmitProposalResponse};

/// POST /api/quote/estimate - Price the quote form
pub async fn estimate_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = request.into_input()?;
    let result = state.estimate_quote_handler().handle(&input);
    Ok(Json(EstimateResponse::from(result)))
}

/// POST /api/quote/proposal - Submit the lead dialog
pub async fn submit_proposal(
    State(state): State<AppState>,
    ClientIdentity(client_id): ClientIdentity,
    Json(request): Json<SubmitProposalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let command = SubmitLeadCommand {
        client_id,
        quote: request.quote.into_input()?,
        lead: request.lead,
    };

    let result = state.submit_lead_handler().handle(command).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitProposalResponse::from(result)),
    ))
}
