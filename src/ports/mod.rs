//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ClientStorage` - Per-client key/value persistence
//! - `PaymentProvider` - Hosted checkout session creation
//! - `LeadRelay` - Fire-and-forget form delivery

mod client_storage;
mod lead_relay;
mod payment_provider;

pub use client_storage::{validate_key, ClientStorage, StorageError};
pub use lead_relay::{FormSubmission, LeadRelay, RelayError};
pub use payment_provider::{
    CheckoutSession, CreateCheckoutRequest, PaymentError, PaymentErrorCode, PaymentProvider,
};
