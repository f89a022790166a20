//! Form relay adapters.
//!
//! - **FormRelayClient** - Posts submissions to a hosted form endpoint
//! - **LoggingLeadRelay** - Logs submissions when no endpoint is configured
//! - **MockLeadRelay** - Records submissions for tests

mod form_relay_client;
mod logging_relay;
mod mock_lead_relay;

pub use form_relay_client::FormRelayClient;
pub use logging_relay::LoggingLeadRelay;
pub use mock_lead_relay::MockLeadRelay;
