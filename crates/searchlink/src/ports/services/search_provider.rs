//! Search Provider Port
//!
//! Abstract interface for the third-party search API.

use async_trait::async_trait;

use crate::domain::entities::SearchResponse;
use crate::domain::errors::DomainError;

/// Service interface for provider-backed search
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query against the provider and normalize the result.
    ///
    /// Fails with `DomainError::Configuration` without any network call
    /// when credentials are missing, and with `DomainError::Upstream` for
    /// every transport, status, or decoding failure.
    async fn perform_search(&self, query: &str) -> Result<SearchResponse, DomainError>;

    /// Whether credentials are present
    fn is_configured(&self) -> bool;
}
