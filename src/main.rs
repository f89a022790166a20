//! Studio Desk server entry point.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use studio_desk::adapters::{
    app_router, AppState, FileClientStorage, FormRelayClient, InMemoryClientStorage,
    LoggingLeadRelay, MockPaymentProvider, RouterSettings, StripeConfig, StripePaymentAdapter,
};
use studio_desk::config::{AppConfig, StorageBackend, ValidationError};
use studio_desk::domain::dashboard::DashboardOptions;
use studio_desk::ports::{ClientStorage, LeadRelay, PaymentProvider};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let state = build_state(&config)?;
    let settings = RouterSettings {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
    };
    let app = app_router(state, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Studio Desk listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.json_logs() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

fn build_state(config: &AppConfig) -> Result<AppState, BoxError> {
    let storage: Arc<dyn ClientStorage> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory client storage; records are lost on restart");
            Arc::new(InMemoryClientStorage::new())
        }
        StorageBackend::File => {
            let dir = config
                .storage
                .data_dir
                .as_ref()
                .ok_or(ValidationError::MissingDataDir)?;
            tracing::info!(data_dir = %dir.display(), "Using file client storage");
            Arc::new(FileClientStorage::new(dir))
        }
    };

    let payment_provider: Arc<dyn PaymentProvider> = match &config.payment.stripe_api_key {
        Some(key) if config.payment.uses_stripe() => {
            tracing::info!(
                test_mode = config.payment.is_test_mode(),
                "Using Stripe payment provider"
            );
            let stripe = StripeConfig::new(key.expose_secret().clone())
                .with_base_url(config.payment.api_base_url.clone())
                .with_deposit(
                    config.payment.deposit_amount_cents,
                    config.payment.currency.clone(),
                    config.payment.product_name.clone(),
                );
            Arc::new(StripePaymentAdapter::new(stripe))
        }
        _ if config.is_production() => {
            return Err(ValidationError::MissingRequired("PAYMENT__STRIPE_API_KEY").into());
        }
        _ => {
            tracing::warn!("No Stripe key configured; using mock payment provider");
            Arc::new(MockPaymentProvider::new())
        }
    };

    let relay: Arc<dyn LeadRelay> = match config.relay.endpoint() {
        Some(endpoint) => {
            tracing::info!(endpoint = %endpoint, "Relaying submissions to form endpoint");
            Arc::new(FormRelayClient::new(
                endpoint,
                Duration::from_secs(config.relay.request_timeout_secs),
            ))
        }
        None => {
            tracing::warn!("No form endpoint configured; submissions are only logged");
            Arc::new(LoggingLeadRelay::new())
        }
    };

    let options = DashboardOptions {
        suppress_when_proposal_pending: config.features.suppress_dashboard_when_proposal_pending,
        live_preview_url: config.features.live_preview_url.clone(),
    };

    Ok(AppState::new(storage, payment_provider, relay)
        .with_public_base_url(&config.server.public_base_url)
        .with_dashboard_options(options)
        .with_booking_url(config.features.booking_url.clone()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
