//! Search request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use searchlink::{SearchInformation, SearchQuery, SearchResponse, SearchResultItem};

/// Simple search request (JSON or form-encoded)
#[derive(Debug, Deserialize, ToSchema)]
pub struct SimpleSearchRequest {
    pub query: String,
    pub token: Option<String>,
}

impl From<SimpleSearchRequest> for SearchQuery {
    fn from(req: SimpleSearchRequest) -> Self {
        Self {
            query: req.query,
            token: req.token,
        }
    }
}

/// One search hit
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl From<SearchResultItem> for SearchItem {
    fn from(item: SearchResultItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
        }
    }
}

/// Search response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<SearchItem>,
    /// Provider statistics, exactly as the provider returned them
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub search_information: Option<SearchInformation>,
}

impl From<SearchResponse> for SearchResult {
    fn from(res: SearchResponse) -> Self {
        Self {
            items: res.items.into_iter().map(SearchItem::from).collect(),
            search_information: res.search_information,
        }
    }
}

/// Error body returned by every failing route
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
