//! Search - Query and normalized provider results
//!
//! Pure domain entities without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::DomainError;

/// SearchQuery - One inbound search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    /// Accepted for API compatibility, not forwarded to the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            token: None,
        }
    }

    /// Reject empty queries before anything reaches the provider
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.query.is_empty() {
            return Err(DomainError::Validation(
                "The 'query' field must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

/// SearchResultItem - One normalized result, in provider ranking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// SearchInformation - Provider statistics (`totalResults`, `searchTime`, ...)
///
/// Kept as raw JSON: no field is defaulted or re-typed on the way through.
pub type SearchInformation = Map<String, Value>;

/// SearchResponse - Normalized search result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<SearchResultItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_information: Option<SearchInformation>,
}
