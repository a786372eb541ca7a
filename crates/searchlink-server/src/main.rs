use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod services;

use adapters::{GoogleSearchClient, HttpRegistryClient};
use application::SearchService;
use config::Settings;
use services::RegistrationService;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("🔎 Searchlink API initializing...");

    let settings = Settings::from_env();

    // Search provider (degraded without credentials)
    let search = SearchService::new(Arc::new(GoogleSearchClient::from_config(&settings.provider)));
    if search.provider_configured() {
        tracing::info!("🔍 Google Search initialized with API credentials");
    } else {
        tracing::warn!(
            "⚠️  Google API credentials not configured. Set GOOGLE_API_KEY and GOOGLE_SEARCH_ENGINE_ID environment variables."
        );
    }

    let state = AppState {
        search: Arc::new(search),
    };

    let router = routes::app(state);

    let addr = settings.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("✅ Searchlink API listening on {}", addr);

    // Registry client
    let registry = Arc::new(HttpRegistryClient::from_config(&settings.registration));
    let registration = RegistrationService::new(registry, settings.registration.clone());

    let served = run(listener, router, registration, shutdown_signal()).await;
    tracing::info!("👋 Searchlink API stopped");

    served
}

/// Serve HTTP while the registry client starts alongside it, so a slow
/// registry never delays the first request.
async fn run(
    listener: tokio::net::TcpListener,
    router: axum::Router,
    mut registration: RegistrationService,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let server = async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")
    };

    let (served, ()) = tokio::join!(server, registration.start());

    registration.stop();
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("⚠️  Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("⚠️  Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
