//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::models::{ErrorBody, HealthResponse, SearchItem, SearchResult, SimpleSearchRequest};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::search::simple_search,
        super::search::search_health,
        super::health::health_check,
    ),
    components(schemas(
        SimpleSearchRequest,
        SearchResult,
        SearchItem,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "Search", description = "Provider-backed web search"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/openapi.json", get(openapi_json))
}
