//! Dashboard HTTP server
//!
//! Axum server hosting the dashboard page plus JSON endpoints for column
//! choices and chart figures. One dashboard session per process; requests
//! serialize through its lock, so no two loads run concurrently.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::DashboardConfig;
use crate::loader::SheetLoader;
use crate::view::Dashboard;

use super::handlers;

/// Server bind configuration
#[derive(Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub version: String,
    pub loader: SheetLoader,
    pub dashboard: Mutex<Dashboard>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            loader: SheetLoader::with_base_url(config.base_url.clone()),
            dashboard: Mutex::new(Dashboard::new(config)),
        }
    }
}

/// Build the router over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/api/v1/refresh", post(handlers::refresh))
        .route("/api/v1/columns", get(handlers::columns))
        .route("/api/v1/chart", get(handlers::chart))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the dashboard server
pub async fn run_server(config: ApiConfig, dashboard: DashboardConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetboard=info,tower_http=info".into()),
        )
        .init();

    let state = Arc::new(AppState::new(dashboard));
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("sheetboard dashboard starting on http://{}", addr);
    info!("   Page: /, API: /api/v1/columns, /api/v1/chart, /api/v1/refresh");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("sheetboard shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}
