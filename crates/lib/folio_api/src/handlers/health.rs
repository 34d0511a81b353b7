//! Liveness endpoint.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /api/health` — reports the running core version.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: folio_core::version().into(),
    })
}
