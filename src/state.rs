//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable, cheaply clonable pieces: the parsed config, the
//! remote API client and the route guard. Per-user session data never lives
//! here; it is read from cookies on every request.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::guard::layer::RouteGuard;
use crate::guard::matcher::Matcher;

/// Clone is required by Axum; every field is Arc-wrapped or cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: ApiClient,
    pub guard: RouteGuard,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the remote API client cannot be built from `config`.
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api_url, config.api_timeouts)?;
        let guard = RouteGuard::new(config.guard_policy, Matcher::default());
        Ok(Self { config: Arc::new(config), api, guard })
    }

    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.config.cookie_secure
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::ApiTimeouts;
    use crate::guard::GuardPolicy;
    use axum::Router;

    /// Serve `router` on an ephemeral localhost port and return its base URL.
    pub async fn spawn_router(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server failed");
        });
        format!("http://{addr}")
    }

    /// HTTP client that reports redirects instead of following them.
    #[must_use]
    pub fn no_redirect_client() -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("test client should build")
    }

    /// Config pointing at `api_url`, with a site directory that does not exist.
    #[must_use]
    pub fn test_config(api_url: &str) -> AppConfig {
        AppConfig {
            port: 0,
            api_url: api_url.to_owned(),
            site_dir: std::env::temp_dir().join("inkgate-test-site-missing"),
            guard_policy: GuardPolicy::Fine,
            cookie_secure: false,
            api_timeouts: ApiTimeouts { request_secs: 5, connect_secs: 2 },
        }
    }

    /// `AppState` whose remote API is the given stub base URL.
    #[must_use]
    pub fn test_app_state(api_url: &str) -> AppState {
        AppState::new(test_config(api_url)).expect("test state should build")
    }

    /// Write `pages` (relative path, contents) into a fresh directory under the system temp dir.
    pub fn write_test_site(pages: &[(&str, &str)]) -> std::path::PathBuf {
        static NEXT: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!("inkgate-test-site-{}-{n}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        for (rel, contents) in pages {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create site dir");
            }
            std::fs::write(&path, contents).expect("write site page");
        }
        root
    }
}
