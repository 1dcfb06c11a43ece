//! Search-suggestion query rules.
//!
//! Short queries never reach the remote API: a query needs at least
//! `MIN_QUERY_CHARS` non-blank characters before suggestions are fetched.

use serde::{Deserialize, Serialize};

pub const MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_SUGGESTION_LIMIT: u32 = 5;
pub const MAX_SUGGESTION_LIMIT: u32 = 20;

/// Kind of entity a suggestion points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    User,
    Post,
    Tag,
    Category,
}

impl SearchType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Post => "post",
            Self::Tag => "tag",
            Self::Category => "category",
        }
    }
}

/// Query string of `GET /api/search/suggestions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<SearchType>,
}

/// Normalized suggestion query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    pub q: String,
    pub limit: u32,
    pub kind: Option<SearchType>,
}

impl SuggestionQuery {
    #[must_use]
    pub fn new(q: impl Into<String>, limit: Option<u32>, kind: Option<SearchType>) -> Self {
        let limit = limit
            .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
            .clamp(1, MAX_SUGGESTION_LIMIT);
        Self { q: q.into(), limit, kind }
    }

    /// Whether the query is long enough to be worth sending upstream.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.q.trim().chars().count() >= MIN_QUERY_CHARS
    }

    /// Query pairs in the order the remote API documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone()), ("limit", self.limit.to_string())];
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_owned()));
        }
        pairs
    }
}

impl From<SuggestionParams> for SuggestionQuery {
    fn from(params: SuggestionParams) -> Self {
        Self::new(params.q, params.limit, params.kind)
    }
}
