//! Search suggestion endpoint.

use super::types::SuggestionResponse;
use super::{ApiClient, ApiError};
use crate::search::SuggestionQuery;

impl ApiClient {
    /// `GET /search/suggestions?q=&limit=&type=`.
    pub async fn suggestions(&self, query: &SuggestionQuery) -> Result<SuggestionResponse, ApiError> {
        self.send_json(
            self.get(&["search", "suggestions"]).query(&query.query_pairs()),
            None,
            "Search failed",
        )
        .await
    }
}
