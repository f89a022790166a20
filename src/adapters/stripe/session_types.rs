//! Stripe API response payloads.

use serde::{Deserialize, Serialize};

/// Stripe Checkout Session object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeCheckoutSession {
    /// Unique session identifier (cs_...).
    pub id: String,

    /// Hosted payment page to redirect the customer to.
    pub url: Option<String>,

    /// Session payment status.
    #[serde(default)]
    pub payment_status: Option<String>,

    /// Unix timestamp after which the session can no longer be paid.
    #[serde(default)]
    pub expires_at: Option<i64>,

    /// Custom metadata attached to the session.
    #[serde(default)]
    pub metadata: std::collections::HashMap<String, String>,
}

/// Stripe error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
