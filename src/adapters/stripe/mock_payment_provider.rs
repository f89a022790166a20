//! Mock payment provider for development and tests.
//!
//! Stands in for Stripe when no API key is configured. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::ports::{CheckoutSession, CreateCheckoutRequest, PaymentError, PaymentProvider};

/// Configurable in-process `PaymentProvider`.
///
/// Without configuration every checkout succeeds and redirects straight to
/// the request's success URL, which lets the whole flow run locally.
#[derive(Default)]
pub struct MockPaymentProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    next_checkout: Option<CheckoutSession>,

    /// Consumed by the next call.
    next_error: Option<PaymentError>,

    /// Returned by every call until cleared.
    persistent_error: Option<PaymentError>,

    requests: Vec<CreateCheckoutRequest>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_checkout_session(&self, session: CheckoutSession) {
        self.state().next_checkout = Some(session);
    }

    /// Fail the next call only.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    /// Fail every call until `clear_errors`.
    pub fn fail_always(&self, error: PaymentError) {
        self.state().persistent_error = Some(error);
    }

    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.persistent_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn requests(&self) -> Vec<CreateCheckoutRequest> {
        self.state().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut state = self.state();
        state.requests.push(request.clone());

        if let Some(error) = state.persistent_error.clone() {
            return Err(error);
        }
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        let session = state.next_checkout.take().unwrap_or_else(|| {
            let id = format!("cs_mock_{}", uuid::Uuid::new_v4().simple());
            CheckoutSession {
                id,
                url: request.success_url.clone(),
                expires_at: chrono::Utc::now().timestamp() + 24 * 60 * 60,
            }
        });

        tracing::debug!(
            session_id = %session.id,
            project_type = %request.project_type,
            "Mock checkout session created"
        );
        Ok(session)
    }
}
