//! Search Application Service (Use Case)
//!
//! Validates inbound queries and delegates them to the search provider.

use std::sync::Arc;

use searchlink::{DomainError, SearchProvider, SearchQuery, SearchResponse};

/// Application service for search operations
pub struct SearchService {
    provider: Arc<dyn SearchProvider>,
}

impl SearchService {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Run a simple search
    pub async fn simple_search(&self, query: SearchQuery) -> Result<SearchResponse, DomainError> {
        query.validate()?;

        if query.token.is_some() {
            tracing::debug!("Search request carries a token (ignored)");
        }

        let response = self.provider.perform_search(&query.query).await?;

        tracing::info!("🔍 Search: {} -> {} items", query.query, response.items.len());

        Ok(response)
    }

    pub fn provider_configured(&self) -> bool {
        self.provider.is_configured()
    }
}
