//! PACE Event Portal - Event Management Backend API
//!
//! Backend for the P.A. College of Engineering event portal: students
//! browse and register for events, clubs submit them with approval
//! documents, and admins approve or reject them. State lives in JSON
//! collections on local disk; AI assistance is delegated to Gemini.

use std::net::SocketAddr;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pace_events::api::{self, AppState};
use pace_events::gateway::GeminiGateway;
use pace_events::session::SessionStore;
use pace_events::store::EventStore;
use pace_events::Config;

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pace_events=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application router
fn build_router(state: AppState) -> Router {
    let api_router = api::create_router().layer(middleware::from_fn_with_state(
        state.clone(),
        api::middleware::session_middleware,
    ));

    Router::new()
        // Health check (no session)
        .route("/health", axum::routing::get(health_check))
        .nest("/api/v1", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("Starting PACE Event Portal server");

    std::fs::create_dir_all(&config.data_dir)?;

    let store = EventStore::open(&config.data_dir);
    let sessions = SessionStore::open(&config.data_dir);
    let gateway = GeminiGateway::new(config.gemini_api_key.clone());

    if !gateway.is_configured() {
        tracing::warn!("GEMINI_API_KEY not set; AI features will answer with fallbacks");
    }

    tracing::info!("Collections loaded from {:?}", config.data_dir);
    tracing::info!("Listening on http://{}", addr);

    // Build router and start server
    let app = build_router(AppState::new(store, sessions, gateway));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down. Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
