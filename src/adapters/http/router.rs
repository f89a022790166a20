//! Top-level router: mounts every module's routes and applies the
//! cross-cutting tower layers.

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::dashboard::dashboard_routes;
use super::extract::CLIENT_ID_HEADER;
use super::inquiry::inquiry_routes;
use super::proposal::{checkout_routes, proposal_routes};
use super::quote::quote_routes;
use super::state::AppState;

/// Layer settings taken from the server configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Allowed browser origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes under `/api`, without state or layers.
///
/// # Routes
/// - `POST /quote/estimate`, `POST /quote/proposal`
/// - `GET /proposal`, `POST /proposal/accept`
/// - `POST /checkout`
/// - `GET /dashboard`, `POST /dashboard/milestone/approve`
/// - `POST /contact`, `POST /waitlist`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/quote", quote_routes())
        .nest("/proposal", proposal_routes())
        .nest("/checkout", checkout_routes())
        .nest("/dashboard", dashboard_routes())
        .merge(inquiry_routes())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(CLIENT_ID_HEADER)])
}

/// Build the complete application router.
pub fn app_router(state: AppState, settings: &RouterSettings) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_skips_invalid_origins() {
        let _ = cors_layer(&["http://localhost:3000".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }

    #[test]
    fn default_settings() {
        let settings = RouterSettings::default();
        assert!(settings.cors_origins.is_empty());
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
    }
}
