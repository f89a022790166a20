//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `relay` - Form relay for leads, inquiries and waitlist sign-ups
//! - `storage` - Per-client record storage (in-memory, file)
//! - `stripe` - Stripe Checkout payment provider

pub mod http;
pub mod relay;
pub mod storage;
pub mod stripe;

pub use http::{app_router, AppState, RouterSettings};
pub use relay::{FormRelayClient, LoggingLeadRelay, MockLeadRelay};
pub use storage::{FileClientStorage, InMemoryClientStorage};
pub use stripe::{MockPaymentProvider, StripeConfig, StripePaymentAdapter};
