//! Route error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use searchlink::DomainError;

use crate::models::ErrorBody;

/// Error returned by route handlers
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Extractor rejection; keeps axum's status
    Rejected(StatusCode, String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Domain(DomainError::Configuration(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Domain(DomainError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Domain(DomainError::RegistryUnavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Rejected(status, _) => *status,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::Domain(e) => e.to_string(),
            ApiError::Rejected(_, message) => message,
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
