//! Searchlink API Routes
//!
//! - /api/search/simple - Web search (Google Custom Search)
//! - /api/search/health - Search component health
//! - /api/health - Service health
//! - /api/openapi.json - OpenAPI document

pub mod error;
pub mod health;
pub mod openapi;
pub mod search;

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// JSON and form bodies
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// CORS: any origin and header, no credentials
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600))
}

/// Full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(search::router())
        .merge(health::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
