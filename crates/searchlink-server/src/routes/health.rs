//! Health Routes

use axum::{routing::get, Json, Router};

use searchlink::SERVICE_NAME;

use crate::models::HealthResponse;
use crate::AppState;

/// Service health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok(SERVICE_NAME))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}
