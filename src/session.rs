//! Per-request session, read from cookies.
//!
//! ARCHITECTURE
//! ============
//! The login flow stores the bearer token returned by the remote API in the
//! `accessToken` cookie, plus the display name in `userName`. Handlers take
//! a `Session` (anyone) or an `AuthSession` (token required) as an
//! extractor; nothing is kept in process-wide state.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;

use crate::guard;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const USER_NAME_COOKIE: &str = "userName";
pub const SESSION_MAX_AGE: Duration = Duration::days(7);

// =============================================================================
// SESSION
// =============================================================================

/// Whatever the browser sent; either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        let read = |name: &str| jar.get(name).map(|c| c.value().to_owned()).filter(|v| !v.is_empty());
        Self { token: read(ACCESS_TOKEN_COOKIE), user_name: read(USER_NAME_COOKIE) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        guard::is_authenticated(self.token.as_deref())
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

/// Body of `GET /api/session`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user_name: Option<String>,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        Self { authenticated: session.is_authenticated(), user_name: session.user_name.clone() }
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// A session that carries a token. Use as a handler parameter to require one.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_name: Option<String>,
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_jar(&CookieJar::from_headers(&parts.headers));
        match session.token {
            Some(token) => Ok(Self { token, user_name: session.user_name }),
            None => Err(StatusCode::UNAUTHORIZED),
        }
    }
}

// =============================================================================
// COOKIES
// =============================================================================

fn session_cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Seven-day `accessToken` cookie holding the remote API's bearer token.
#[must_use]
pub fn access_token_cookie(token: String, secure: bool) -> Cookie<'static> {
    session_cookie(ACCESS_TOKEN_COOKIE, token, secure, SESSION_MAX_AGE)
}

#[must_use]
pub fn user_name_cookie(name: String, secure: bool) -> Cookie<'static> {
    session_cookie(USER_NAME_COOKIE, name, secure, SESSION_MAX_AGE)
}

/// Expire a session cookie immediately.
#[must_use]
pub fn clear_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    session_cookie(name, String::new(), secure, Duration::ZERO)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
