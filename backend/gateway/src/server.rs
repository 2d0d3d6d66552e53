//! Main HTTP server: router construction and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use vocagate_speech::Recognizer;

use crate::{health_api, speech_api};

/// Audio uploads can be several MB; raise the default multipart cap.
const AUDIO_UPLOAD_LIMIT_BYTES: usize = 32 * 1024 * 1024;

/// Application state shared across routes. Read-only after startup.
#[derive(Clone)]
pub struct GatewayState {
    pub recognizer: Arc<dyn Recognizer>,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(recognizer: Arc<dyn Recognizer>) -> Self {
        Self {
            recognizer,
            started_at: Instant::now(),
        }
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route(
            "/speech-to-text",
            post(speech_api::speech_to_text).layer(DefaultBodyLimit::max(AUDIO_UPLOAD_LIMIT_BYTES)),
        )
        .route("/api/health", get(health_api::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server and serve until the process exits.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("vocagate HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
