//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

use crate::guard::{GuardPolicy, UnknownPolicy};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const DEFAULT_SITE_DIR: &str = "./site";
pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid GUARD_POLICY: {0}")]
    InvalidPolicy(#[from] UnknownPolicy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub api_url: String,
    pub site_dir: PathBuf,
    pub guard_policy: GuardPolicy,
    pub cookie_secure: bool,
    pub api_timeouts: ApiTimeouts,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_URL`: remote blog API base URL, default `http://localhost:4000`
    /// - `SITE_DIR`: static page directory, default `./site`
    /// - `GUARD_POLICY`: `fine` (default) or `coarse`
    /// - `COOKIE_SECURE`: boolean; inferred from an `https://` `API_URL` when unset
    /// - `API_REQUEST_TIMEOUT_SECS`: default 10
    /// - `API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `GUARD_POLICY` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `GUARD_POLICY` is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_url = lookup("API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let site_dir = lookup("SITE_DIR").map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);

        let guard_policy = match lookup("GUARD_POLICY") {
            Some(raw) => raw.parse::<GuardPolicy>()?,
            None => GuardPolicy::default(),
        };

        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or_else(|| api_url.starts_with("https://"));

        let api_timeouts = ApiTimeouts {
            request_secs: parse_or(lookup("API_REQUEST_TIMEOUT_SECS"), DEFAULT_API_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(lookup("API_CONNECT_TIMEOUT_SECS"), DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, api_url, site_dir, guard_policy, cookie_secure, api_timeouts })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
