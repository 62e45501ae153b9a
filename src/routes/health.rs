//! GET /health

use axum::Json;

use crate::types::HealthResponse;

/// Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}
