//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter (dto, handlers, routes). Callers are
//! identified by the `X-Client-Id` header.

pub mod dashboard;
pub mod error;
pub mod extract;
pub mod inquiry;
pub mod proposal;
pub mod quote;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use extract::{ClientIdentity, CLIENT_ID_HEADER};
pub use router::{api_routes, app_router, RouterSettings};
pub use state::AppState;
