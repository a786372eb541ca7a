//! Google Custom Search client
//!
//! One GET per query against the Custom Search JSON API; the response is
//! reduced to `{title, link, snippet}` items plus the untouched
//! `searchInformation` block.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use searchlink::{DomainError, SearchInformation, SearchProvider, SearchResponse, SearchResultItem};

use crate::config::{ProviderConfig, DEFAULT_SEARCH_URL};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Search provider backed by Google Custom Search
#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
    api_key: Option<String>,
    search_engine_id: Option<String>,
    base_url: String,
}

impl GoogleSearchClient {
    /// Creates a client; empty credentials leave it unconfigured.
    pub fn new(api_key: Option<String>, search_engine_id: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            search_engine_id: search_engine_id.filter(|id| !id.is_empty()),
            base_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.api_key.clone(), config.search_engine_id.clone())
            .with_base_url(config.base_url.clone())
    }

    /// Overrides the provider endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn credentials(&self) -> Result<(&str, &str), DomainError> {
        match (self.api_key.as_deref(), self.search_engine_id.as_deref()) {
            (Some(key), Some(cx)) => Ok((key, cx)),
            _ => Err(DomainError::Configuration(
                "Google API credentials not configured".to_string(),
            )),
        }
    }

    async fn fetch(&self, key: &str, cx: &str, query: &str) -> Result<ProviderResponse, DomainError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("key", key), ("cx", cx), ("q", query)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(DomainError::upstream)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        response.json().await.map_err(DomainError::upstream)
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn perform_search(&self, query: &str) -> Result<SearchResponse, DomainError> {
        let (key, cx) = self.credentials()?;

        match self.fetch(key, cx, query).await {
            Ok(payload) => Ok(payload.into_response()),
            Err(e) => {
                tracing::error!("Google Search API error: {}", e);
                Err(e)
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }
}

// ============================================
// Provider Wire Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderResponse {
    #[serde(default)]
    items: Option<Vec<ProviderItem>>,
    #[serde(default)]
    search_information: Option<SearchInformation>,
}

/// Only the fields we keep; serde skips the rest (pagemap, htmlTitle, ...)
#[derive(Debug, Deserialize)]
struct ProviderItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

impl ProviderResponse {
    fn into_response(self) -> SearchResponse {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| SearchResultItem {
                title: item.title,
                link: item.link,
                snippet: item.snippet,
            })
            .collect();

        SearchResponse {
            items,
            search_information: self.search_information,
        }
    }
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::upstream(format!("status {}: {}", status.as_u16(), message))
}
