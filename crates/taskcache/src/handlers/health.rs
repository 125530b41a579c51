//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store round trip plus cache status

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub cache_enabled: bool,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Store round trip.
///
/// Lists tasks through the service; 503 when the store cannot answer.
pub async fn healthz(State(state): State<AppState>) -> Response {
    let healthy = match state.service.list_tasks().await {
        Ok(_) => true,
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            false
        }
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthStatus {
            healthy,
            cache_enabled: state.cache_enabled,
        }),
    )
        .into_response()
}
