//! Route guard — decides whether a navigation proceeds or is redirected.
//!
//! DESIGN
//! ======
//! Classification is a pure function of `(policy, path, is_authenticated)`.
//! It never fails, never logs and never touches the request. Wiring into
//! the HTTP pipeline lives in `layer`, and the set of paths the guard is
//! invoked for at all lives in `matcher`.
//!
//! The guard is a UX redirect, not an authorization boundary: token
//! presence is all it checks. The remote API re-validates every token.

pub mod layer;
pub mod matcher;

use std::fmt;
use std::str::FromStr;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

// =============================================================================
// DECISION
// =============================================================================

/// Where a redirect sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

impl RedirectTarget {
    /// Absolute path on the same origin as the original request.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
        }
    }
}

/// Outcome of evaluating the guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Proceed to the requested path unchanged.
    Allow,
    /// Abort and redirect.
    RedirectTo(RedirectTarget),
}

// =============================================================================
// POLICY
// =============================================================================

/// Which route-classification rule set is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    /// The whole `/dashboard` tree, root included, requires a session.
    Coarse,
    /// `/dashboard` itself is public; only `/dashboard/...` requires a session.
    #[default]
    Fine,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown guard policy {0:?} (expected \"fine\" or \"coarse\")")]
pub struct UnknownPolicy(pub String);

impl FromStr for GuardPolicy {
    type Err = UnknownPolicy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fine" => Ok(Self::Fine),
            "coarse" => Ok(Self::Coarse),
            _ => Err(UnknownPolicy(raw.to_owned())),
        }
    }
}

impl fmt::Display for GuardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Coarse => "coarse",
            Self::Fine => "fine",
        })
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Presence-only session check: any non-empty token counts as signed in.
#[must_use]
pub fn is_authenticated(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

fn is_auth_only(path: &str) -> bool {
    path == LOGIN_PATH || path == REGISTER_PATH
}

/// Classify a request path. Total over every `(path, is_authenticated)` pair.
#[must_use]
pub fn classify(policy: GuardPolicy, path: &str, is_authenticated: bool) -> RouteDecision {
    match policy {
        GuardPolicy::Coarse => classify_coarse(path, is_authenticated),
        GuardPolicy::Fine => classify_fine(path, is_authenticated),
    }
}

fn classify_coarse(path: &str, is_authenticated: bool) -> RouteDecision {
    if path.starts_with(DASHBOARD_PATH) && !is_authenticated {
        return RouteDecision::RedirectTo(RedirectTarget::Login);
    }
    if is_auth_only(path) && is_authenticated {
        return RouteDecision::RedirectTo(RedirectTarget::Dashboard);
    }
    RouteDecision::Allow
}

fn classify_fine(path: &str, is_authenticated: bool) -> RouteDecision {
    if path == DASHBOARD_PATH {
        return RouteDecision::Allow;
    }
    if path.starts_with("/dashboard/") && !is_authenticated {
        return RouteDecision::RedirectTo(RedirectTarget::Login);
    }
    if is_auth_only(path) && is_authenticated {
        return RouteDecision::RedirectTo(RedirectTarget::Dashboard);
    }
    RouteDecision::Allow
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
