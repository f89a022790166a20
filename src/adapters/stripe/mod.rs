//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Stripe Checkout:
//! - One-off deposit sessions priced inline
//! - Error mapping from Stripe's error envelope
//!
//! # Security
//!
//! The secret API key is held in a `secrecy::SecretString` and only exposed
//! when building the basic-auth header.
//!
//! # Configuration
//!
//! - `STUDIO_DESK__PAYMENT__STRIPE_API_KEY`: Stripe secret API key. When
//!   unset outside production the `MockPaymentProvider` is used instead.

mod mock_payment_provider;
mod session_types;
mod stripe_adapter;

pub use mock_payment_provider::MockPaymentProvider;
pub use session_types::{StripeCheckoutSession, StripeErrorBody, StripeErrorResponse};
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
