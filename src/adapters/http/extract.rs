//! Request extractors.

use axum::async_trait;
use axum::extract::FromRequestParts;
use http::request::Parts;
use http::HeaderMap;

use crate::domain::foundation::ClientId;

use super::error::ApiError;

/// Header naming the browser-local storage namespace of the caller.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Client identity taken from the `X-Client-Id` header.
///
/// Missing or malformed headers are rejected with 400. Use
/// `Option<ClientIdentity>` where the identity is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIdentity(pub ClientId);

impl ClientIdentity {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<ClientId>().ok())
            .map(Self)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).ok_or_else(ApiError::client_id_required)
    }
}
