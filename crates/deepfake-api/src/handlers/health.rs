//! Health check handler.

use axum::Json;
use chrono::Utc;
use deepfake_core::models::HealthResponse;

/// Liveness probe. Static apart from the timestamp; always 200.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(Utc::now()))
}
