//! Search suggestions for the dashboard search box.

use axum::extract::{Query, State};
use axum::response::Json;

use crate::api::types::SuggestionResponse;
use crate::search::{SuggestionParams, SuggestionQuery};
use crate::state::AppState;

/// `GET /api/search/suggestions?q=&limit=&type=` — short queries and remote
/// failures both answer with an empty list.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Json<SuggestionResponse> {
    let query = SuggestionQuery::from(params);
    if !query.is_enabled() {
        return Json(SuggestionResponse::default());
    }

    match state.api.suggestions(&query).await {
        Ok(resp) => Json(resp),
        Err(e) => {
            tracing::warn!(error = %e, "search suggestions unavailable");
            Json(SuggestionResponse::default())
        }
    }
}
