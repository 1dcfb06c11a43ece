//! Remote blog API client.
//!
//! ARCHITECTURE
//! ============
//! `ApiClient` is a thin HTTP wrapper around the blog platform's REST API.
//! Each resource lives in its own module as an `impl ApiClient` block; the
//! shared request/response plumbing (bearer auth, status handling, error
//! body parsing) lives here. Error body parsing is pure for testability.

pub mod auth;
pub mod blogs;
pub mod comments;
pub mod posts;
pub mod search;
pub mod types;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiTimeouts;
use types::ErrorBody;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by remote API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid API base URL {0:?}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The remote API answered with a non-success status.
    #[error("API responded {status}: {message}")]
    Status { status: u16, message: String, details: Option<HashMap<String, Vec<String>>> },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Remote HTTP status, when the remote API answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Build a `Status` error from a non-2xx response body. The remote API's
/// `message` wins; otherwise `fallback` is used.
pub(crate) fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status, message, details: parsed.details }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn get(&self, segments: &[&str]) -> RequestBuilder {
        self.http.get(self.url(segments))
    }

    pub(crate) fn post(&self, segments: &[&str]) -> RequestBuilder {
        self.http.post(self.url(segments))
    }

    pub(crate) fn patch(&self, segments: &[&str]) -> RequestBuilder {
        self.http.patch(self.url(segments))
    }

    pub(crate) fn delete(&self, segments: &[&str]) -> RequestBuilder {
        self.http.delete(self.url(segments))
    }

    /// Send and return the raw status and body text.
    pub(crate) async fn execute(&self, request: RequestBuilder, token: Option<&str>) -> Result<(u16, String), ApiError> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok((status, body))
    }

    /// Send, require a 2xx and deserialize the body.
    pub(crate) async fn send_json<T>(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.execute(request, token).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body, fallback));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send and require a 2xx; the body is ignored.
    pub(crate) async fn send_unit(&self, request: RequestBuilder, token: Option<&str>, fallback: &str) -> Result<(), ApiError> {
        let (status, body) = self.execute(request, token).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body, fallback));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
