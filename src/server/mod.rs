//! HTTP JSON API for the recommendation engine.
//!
//! Endpoints:
//! - GET  /health     - Liveness probe
//! - POST /recommend  - Evaluate one plant observation
//!
//! All responses use Content-Type: application/json.

mod error;
mod handlers;
mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::Result;

use self::handlers::{handle_health, handle_not_found, handle_recommend};
use self::state::AppState;

/// Build the application router.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handle_health))
        .route("/recommend", post(handle_recommend))
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_permissive {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new());
    let app = create_router(state, config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("PlantOps API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
