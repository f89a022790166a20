//! CreateCheckoutHandler - Command handler for starting a deposit checkout.

use std::sync::Arc;

use crate::application::{ApplicationError, ClientRecords};
use crate::domain::dashboard::CheckoutMarker;
use crate::domain::foundation::ClientId;
use crate::ports::{CheckoutSession, CreateCheckoutRequest, PaymentProvider};

/// Where the payment provider sends the customer afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutUrls {
    /// Success lands on the dashboard with the payment marker; cancel goes
    /// back to the proposal.
    pub fn from_base(public_base_url: &str) -> Self {
        let base = public_base_url.trim_end_matches('/');
        Self {
            success_url: format!("{}/dashboard?payment=success", base),
            cancel_url: format!("{}/dashboard/proposal", base),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    pub client_id: Option<ClientId>,
    /// Blank or missing falls back to "Project".
    pub project_type: Option<String>,
}

/// Handler for creating checkout sessions.
///
/// A successful session re-arms the client's payment marker so the next
/// success redirect is processed once.
#[derive(Clone)]
pub struct CreateCheckoutHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    records: ClientRecords,
    urls: CheckoutUrls,
}

impl CreateCheckoutHandler {
    pub fn new(
        payment_provider: Arc<dyn PaymentProvider>,
        records: ClientRecords,
        urls: CheckoutUrls,
    ) -> Self {
        Self {
            payment_provider,
            records,
            urls,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCheckoutCommand,
    ) -> Result<CheckoutSession, ApplicationError> {
        // 1. Ask the provider for a hosted session
        let request = CreateCheckoutRequest::for_project(
            cmd.project_type.as_deref(),
            cmd.client_id,
            self.urls.success_url.clone(),
            self.urls.cancel_url.clone(),
        );
        let project_type = request.project_type.clone();

        let session = self
            .payment_provider
            .create_checkout_session(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    project_type = %project_type,
                    code = %e.code,
                    retryable = e.retryable,
                    "Checkout session creation failed"
                );
                e
            })?;

        // 2. Re-arm the one-shot success marker
        if let Some(client_id) = cmd.client_id {
            let _guard = self.records.locks.lock(&client_id).await;
            let marker = self
                .records
                .checkout_markers
                .get_or_default(&client_id)
                .await?;
            self.records
                .checkout_markers
                .set(&client_id, &marker.rearm())
                .await?;
        }

        tracing::info!(session_id = %session.id, project_type = %project_type, "Checkout started");
        Ok(session)
    }
}
