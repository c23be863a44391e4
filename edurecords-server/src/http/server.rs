//! Axum server setup
//!
//! Server skeleton with:
//! - Any-origin CORS unless an origin list is configured
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::service::{MissingRecordPolicy, RecordPolicy, BEST_SCORE_THRESHOLD};
use crate::state::AppState;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3333;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3333)
    pub bind_addr: SocketAddr,

    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,

    /// Threshold for `/bestScore` (default: 100)
    pub best_score_threshold: i32,

    /// Answer for update/delete of unknown ids (default: lenient)
    pub missing_policy: MissingRecordPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            cors_origins: Vec::new(),
            best_score_threshold: BEST_SCORE_THRESHOLD,
            missing_policy: MissingRecordPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Layer policy derived from this config.
    pub fn record_policy(&self) -> RecordPolicy {
        RecordPolicy {
            best_score_threshold: self.best_score_threshold,
            missing: self.missing_policy,
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::educations::router())
        .merge(routes::stats::router())
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let store = open_store(&StoreConfig::Memory).await?;
/// let config = ServerConfig::default();
/// run_server(AppState::new(store, config.record_policy()), config).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        backend = state.store().backend(),
        best_score_threshold = config.best_score_threshold,
        missing_policy = %config.missing_policy,
        "Server configured"
    );
    if config.cors_origins.is_empty() {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }

    let app = build_router(state, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server is running on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
