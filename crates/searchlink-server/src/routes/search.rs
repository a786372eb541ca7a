//! Search Routes - Google Custom Search facade

use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    routing::{get, post},
    Form, Json, Router,
};

use crate::models::{ErrorBody, HealthResponse, SearchResult, SimpleSearchRequest};
use crate::routes::error::ApiError;
use crate::AppState;

/// Health name of the search component
pub const COMPONENT_NAME: &str = "google-search";

/// Search body accepted as JSON or `application/x-www-form-urlencoded`
pub struct SearchPayload(pub SimpleSearchRequest);

#[async_trait]
impl<S> FromRequest<S> for SearchPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(payload) = Form::<SimpleSearchRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?;
            Ok(Self(payload))
        } else {
            let Json(payload) = Json::<SimpleSearchRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?;
            Ok(Self(payload))
        }
    }
}

/// Execute a simple web search
#[utoipa::path(
    post,
    path = "/api/search/simple",
    request_body = SimpleSearchRequest,
    responses(
        (status = 200, description = "Search results", body = SearchResult),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 502, description = "Search provider failed", body = ErrorBody),
        (status = 503, description = "Search provider not configured", body = ErrorBody)
    ),
    tag = "Search"
)]
pub async fn simple_search(
    State(state): State<AppState>,
    SearchPayload(payload): SearchPayload,
) -> Result<Json<SearchResult>, ApiError> {
    let result = state.search.simple_search(payload.into()).await?;
    Ok(Json(result.into()))
}

/// Search component health
#[utoipa::path(
    get,
    path = "/api/search/health",
    responses(
        (status = 200, description = "Search component is up", body = HealthResponse)
    ),
    tag = "Search"
)]
pub async fn search_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok(COMPONENT_NAME))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/search/simple", post(simple_search))
        .route("/api/search/health", get(search_health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::GoogleSearchClient;
    use crate::application::SearchService;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, StatusCode};
    use httpmock::prelude::*;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(client: GoogleSearchClient) -> Router {
        let state = AppState {
            search: Arc::new(SearchService::new(Arc::new(client))),
        };
        crate::routes::app(state)
    }

    fn mocked_app(server: &MockServer) -> Router {
        app_with(
            GoogleSearchClient::new(Some("key".into()), Some("cx".into()))
                .with_base_url(server.url("/customsearch/v1")),
        )
    }

    fn post(content_type: &str, body: impl Into<Body>) -> axum::extract::Request {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri("/api/search/simple")
            .header(CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn two_cats(server: &MockServer) -> httpmock::Mock<'_> {
        server.mock(|when, then| {
            when.method(GET)
                .path("/customsearch/v1")
                .query_param("q", "cats");
            then.status(200).json_body(json!({
                "kind": "customsearch#search",
                "items": [
                    {
                        "title": "Cat - Wikipedia",
                        "link": "https://en.wikipedia.org/wiki/Cat",
                        "snippet": "The cat is a domestic species.",
                        "htmlTitle": "<b>Cat</b> - Wikipedia"
                    },
                    {
                        "title": "Cats (musical)",
                        "link": "https://en.wikipedia.org/wiki/Cats_(musical)",
                        "snippet": "Cats is a sung-through musical.",
                        "cacheId": "xyz"
                    }
                ],
                "searchInformation": { "searchTime": 0.2, "totalResults": "2" }
            }));
        })
    }

    #[tokio::test]
    async fn test_simple_search_end_to_end() {
        let server = MockServer::start();
        let mock = two_cats(&server);

        let response = mocked_app(&server)
            .oneshot(post("application/json", r#"{"query":"cats"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock.assert();

        let body = json_body(response).await;
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            json!({
                "title": "Cat - Wikipedia",
                "link": "https://en.wikipedia.org/wiki/Cat",
                "snippet": "The cat is a domestic species."
            })
        );
        assert_eq!(items[1]["title"], "Cats (musical)");
        assert_eq!(items[1]["link"], "https://en.wikipedia.org/wiki/Cats_(musical)");
        assert_eq!(items[1]["snippet"], "Cats is a sung-through musical.");
        assert_eq!(
            body["searchInformation"],
            json!({ "searchTime": 0.2, "totalResults": "2" })
        );
    }

    #[tokio::test]
    async fn test_simple_search_accepts_form_body() {
        let server = MockServer::start();
        let mock = two_cats(&server);

        let response = mocked_app(&server)
            .oneshot(post(
                "application/x-www-form-urlencoded",
                "query=cats&token=abc",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock.assert();
        assert_eq!(json_body(response).await["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_credentials_is_service_unavailable() {
        let server = MockServer::start();
        let mock = two_cats(&server);
        let app = app_with(
            GoogleSearchClient::new(None, None).with_base_url(server.url("/customsearch/v1")),
        );

        let response = app
            .oneshot(post("application/json", r#"{"query":"cats"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(mock.calls(), 0);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("credentials not configured"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_bad_gateway() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/customsearch/v1");
            then.status(500).body("boom");
        });

        let response = mocked_app(&server)
            .oneshot(post("application/json", r#"{"query":"cats"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("Failed to perform search"));
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_rejected() {
        let server = MockServer::start();
        let mock = two_cats(&server);

        for body in [r#"{"query":""}"#, r#"{"token":"abc"}"#, r#"{"query":42}"#] {
            let response = mocked_app(&server)
                .oneshot(post("application/json", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        }

        let response = mocked_app(&server)
            .oneshot(post("application/json", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_body_over_one_megabyte_is_rejected() {
        let server = MockServer::start();
        let padding = "a".repeat(1024 * 1024 + 1);
        let body = format!(r#"{{"query":"{padding}"}}"#);

        let response = mocked_app(&server)
            .oneshot(post("application/json", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_component_health() {
        let response = app_with(GoogleSearchClient::new(None, None))
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/search/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], COMPONENT_NAME);
    }
}
