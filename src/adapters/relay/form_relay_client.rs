//! HTTP form relay (Formspree-style endpoint).
//!
//! Posts `application/x-www-form-urlencoded` bodies and treats any 2xx as
//! delivered.

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{FormSubmission, LeadRelay, RelayError};

pub struct FormRelayClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl FormRelayClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client for form relay");
                reqwest::Client::new()
            });
        Self {
            endpoint: endpoint.into(),
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadRelay for FormRelayClient {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), RelayError> {
        let fields = submission.to_fields();

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&fields)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(kind = submission.kind(), error = %e, "Form relay unreachable");
                RelayError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                kind = submission.kind(),
                status = status.as_u16(),
                "Form relay rejected submission"
            );
            return Err(RelayError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(kind = submission.kind(), "Form submission relayed");
        Ok(())
    }
}
