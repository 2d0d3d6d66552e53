//! Health endpoint.

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::server::GatewayState;

/// Handler for `GET /api/health`.
pub async fn get_health(State(state): State<GatewayState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vocagate",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "timestamp": Utc::now(),
    }))
}
