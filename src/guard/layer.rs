//! Axum middleware that applies the guard before any page logic runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::matcher::Matcher;
use super::{GuardPolicy, RouteDecision, classify, is_authenticated};
use crate::session::ACCESS_TOKEN_COOKIE;

/// Guard configuration shared by every request.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    policy: GuardPolicy,
    matcher: Arc<Matcher>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(policy: GuardPolicy, matcher: Matcher) -> Self {
        Self { policy, matcher: Arc::new(matcher) }
    }

    #[must_use]
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Out-of-scope paths are allowed without being classified. A single
    /// trailing slash is ignored, so `/dashboard/` is the dashboard root.
    #[must_use]
    pub fn evaluate(&self, path: &str, token: Option<&str>) -> RouteDecision {
        if !self.matcher.matches(path) {
            return RouteDecision::Allow;
        }
        classify(self.policy, trim_trailing_slash(path), is_authenticated(token))
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(GuardPolicy::default(), Matcher::default())
    }
}

/// `from_fn_with_state` middleware: pass through or answer with a 307.
pub async fn route_guard(State(guard): State<RouteGuard>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let token = jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value);

    match guard.evaluate(path, token) {
        RouteDecision::Allow => next.run(request).await,
        RouteDecision::RedirectTo(target) => {
            tracing::debug!(%path, to = target.path(), policy = %guard.policy, "route guard redirect");
            Redirect::temporary(target.path()).into_response()
        }
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
