//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe Checkout API.
//! Every session is a one-off `payment` for the kickoff deposit, priced
//! inline with `price_data` so no products need to exist in the Stripe
//! dashboard.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key).with_deposit(50_000, "usd", "Project Kickoff Deposit");
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CheckoutSession, CreateCheckoutRequest, PaymentError, PaymentErrorCode, PaymentProvider,
};

use super::session_types::{StripeCheckoutSession, StripeErrorResponse};

/// Stripe checkout sessions expire after 24 hours by default.
const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// Deposit charged per checkout, in the currency's minor unit.
    deposit_amount_cents: u64,

    currency: String,

    /// Line item name shown on the hosted payment page.
    product_name: String,

    request_timeout: Duration,
}

impl StripeConfig {
    /// Create a new Stripe configuration with the default deposit.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            deposit_amount_cents: 50_000,
            currency: "usd".to_string(),
            product_name: "Project Kickoff Deposit".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_deposit(
        mut self,
        amount_cents: u64,
        currency: impl Into<String>,
        product_name: impl Into<String>,
    ) -> Self {
        self.deposit_amount_cents = amount_cents;
        self.currency = currency.into();
        self.product_name = product_name.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Stripe payment provider adapter.
///
/// Implements `PaymentProvider` for Stripe API integration.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client for Stripe");
                reqwest::Client::new()
            });
        Self {
            config,
            http_client,
        }
    }

    /// Form parameters for a deposit checkout session.
    fn checkout_params(&self, request: &CreateCheckoutRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("mode", "payment".to_string()),
            ("payment_method_types[0]", "card".to_string()),
            ("line_items[0][quantity]", "1".to_string()),
            (
                "line_items[0][price_data][currency]",
                self.config.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                self.config.deposit_amount_cents.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                self.config.product_name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]",
                format!("Kickoff deposit for {}", request.project_type),
            ),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
            ("metadata[projectType]", request.project_type.clone()),
        ];

        if let Some(client_id) = request.client_id {
            params.push(("metadata[clientId]", client_id.to_string()));
        }

        params
    }

    /// Map a non-success Stripe response to a payment error.
    fn error_from_response(status: reqwest::StatusCode, body: &str) -> PaymentError {
        let parsed = serde_json::from_str::<StripeErrorResponse>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|r| r.error.message.clone())
            .unwrap_or_else(|| format!("Stripe API error ({})", status));

        let code = match status.as_u16() {
            401 | 403 => PaymentErrorCode::AuthenticationError,
            400 | 404 => PaymentErrorCode::InvalidRequest,
            429 => PaymentErrorCode::RateLimitExceeded,
            _ => PaymentErrorCode::ProviderError,
        };

        let mut error = PaymentError::new(code, message);
        if let Some(provider_code) = parsed.and_then(|r| r.error.code) {
            error = error.with_provider_code(provider_code);
        }
        error
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let params = self.checkout_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Stripe checkout request failed");
                PaymentError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let error = Self::error_from_response(status, &error_text);
            tracing::error!(
                status = status.as_u16(),
                code = %error.code,
                "Stripe rejected checkout session"
            );
            return Err(error);
        }

        let stripe_session: StripeCheckoutSession = response.json().await.map_err(|e| {
            PaymentError::provider(format!("Failed to parse Stripe response: {}", e))
        })?;

        let url = stripe_session.url.ok_or_else(|| {
            PaymentError::provider(format!(
                "Stripe session {} has no redirect URL",
                stripe_session.id
            ))
        })?;

        let expires_at = stripe_session
            .expires_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp() + SESSION_TTL_SECS);

        tracing::info!(
            session_id = %stripe_session.id,
            project_type = %request.project_type,
            "Created Stripe checkout session"
        );

        Ok(CheckoutSession {
            id: stripe_session.id,
            url,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClientId;

    fn test_config() -> StripeConfig {
        StripeConfig::new("sk_test_key")
    }

    fn request(client_id: Option<ClientId>) -> CreateCheckoutRequest {
        CreateCheckoutRequest::for_project(
            Some("Mobile App"),
            client_id,
            "http://localhost:3000/dashboard?payment=success",
            "http://localhost:3000/dashboard/proposal",
        )
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_new_sets_defaults() {
        let config = StripeConfig::new("api_key");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.deposit_amount_cents, 50_000);
        assert_eq!(config.currency, "usd");
        assert_eq!(config.product_name, "Project Kickoff Deposit");
    }

    #[test]
    fn config_with_base_url() {
        let config = StripeConfig::new("key").with_base_url("http://localhost:8080");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Request Building Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn checkout_params_describe_one_off_deposit() {
        let adapter = StripePaymentAdapter::new(test_config());
        let params = adapter.checkout_params(&request(None));

        assert_eq!(param(&params, "mode"), Some("payment"));
        assert_eq!(
            param(&params, "line_items[0][price_data][unit_amount]"),
            Some("50000")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][product_data][name]"),
            Some("Project Kickoff Deposit")
        );
        assert_eq!(param(&params, "metadata[projectType]"), Some("Mobile App"));
        assert_eq!(
            param(&params, "success_url"),
            Some("http://localhost:3000/dashboard?payment=success")
        );
        assert_eq!(param(&params, "metadata[clientId]"), None);
    }

    #[test]
    fn checkout_params_include_client_metadata() {
        let adapter = StripePaymentAdapter::new(test_config());
        let client_id = ClientId::new();
        let params = adapter.checkout_params(&request(Some(client_id)));
        let expected = client_id.to_string();
        assert_eq!(param(&params, "metadata[clientId]"), Some(expected.as_str()));
    }

    #[test]
    fn custom_deposit_is_used() {
        let adapter = StripePaymentAdapter::new(test_config().with_deposit(
            25_000,
            "eur",
            "Discovery Sprint",
        ));
        let params = adapter.checkout_params(&request(None));
        assert_eq!(
            param(&params, "line_items[0][price_data][currency]"),
            Some("eur")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][unit_amount]"),
            Some("25000")
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn maps_auth_failure() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"Invalid API Key provided"}}"#;
        let err = StripePaymentAdapter::error_from_response(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.code, PaymentErrorCode::AuthenticationError);
        assert_eq!(err.message, "Invalid API Key provided");
        assert!(!err.retryable);
    }

    #[test]
    fn maps_rate_limit_as_retryable() {
        let err = StripePaymentAdapter::error_from_response(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            "",
        );
        assert_eq!(err.code, PaymentErrorCode::RateLimitExceeded);
        assert!(err.retryable);
    }

    #[test]
    fn keeps_provider_code() {
        let body = r#"{"error":{"code":"parameter_missing","message":"Missing success_url"}}"#;
        let err = StripePaymentAdapter::error_from_response(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(err.code, PaymentErrorCode::InvalidRequest);
        assert_eq!(err.provider_code.as_deref(), Some("parameter_missing"));
    }

    #[tokio::test]
    async fn unreachable_api_is_network_error() {
        let adapter =
            StripePaymentAdapter::new(test_config().with_base_url("http://127.0.0.1:9"));
        let err = adapter
            .create_checkout_session(request(None))
            .await
            .unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::NetworkError);
        assert!(err.retryable);
    }
}
