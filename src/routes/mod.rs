//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the edge's JSON endpoints, which forward to the remote
//! blog API with the caller's bearer token, and falls back to the static
//! site directory for page paths. The route guard wraps everything; its
//! matcher limits it to the dashboard and auth pages.

pub mod auth;
pub mod blogs;
pub mod posts;
pub mod search;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::ApiError;
use crate::guard::layer::route_guard;
use crate::slug::generate_slug;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of an edge handler, rendered as `{ "message": ... }` JSON.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<std::collections::HashMap<String, Vec<String>>>,
}

/// Remote 4xx answers pass through; anything else is the upstream's fault.
pub(crate) fn api_error_to_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Status { status, .. } if (400..500).contains(status) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody { message: message.to_owned(), details: None })
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody { message: message.to_owned(), details: None }),
            Self::Api(err) => {
                let status = api_error_to_status(&err);
                if status == StatusCode::BAD_GATEWAY {
                    tracing::error!(error = %err, "remote API call failed");
                }
                match err {
                    ApiError::Status { message, details, .. } => (status, ErrorBody { message, details }),
                    _ => (status, ErrorBody { message: "Upstream API unavailable".to_owned(), details: None }),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// JSON endpoints served by the edge itself.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/slug", get(slug_preview))
        .route("/api/session", get(auth::session))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route("/api/blogs/me", get(blogs::my_blog).patch(blogs::update_my_blog_images))
        .route("/api/blogs/{id}", patch(blogs::update_blog).delete(blogs::delete_blog))
        .route("/api/blogs/public/{slug}", get(blogs::public_blog))
        .route("/api/blogs/public/{slug}/posts", get(blogs::public_blog_posts))
        .route("/api/public/posts", get(posts::public_posts))
        .route("/api/public/popular", get(posts::popular))
        .route("/api/public/featured", get(posts::featured))
        .route("/api/public/post/{slug}", get(posts::public_post))
        .route("/api/posts", get(posts::my_posts).post(posts::create_post))
        .route("/api/posts/{id}", patch(posts::update_post).delete(posts::delete_post))
        .route("/api/posts/{id}/comments", get(posts::comments).post(posts::add_comment))
        .route("/api/search/suggestions", get(search::suggestions))
}

/// Full edge router: API routes, static pages, route guard, tracing.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(&state.config.site_dir).append_index_html_on_directories(true);
    let guard = axum::middleware::from_fn_with_state(state.guard.clone(), route_guard);

    api_routes()
        .fallback_service(site)
        .with_state(state)
        .layer(guard)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    slug: String,
}

/// `GET /api/slug?title=` — preview the slug a post title will get.
async fn slug_preview(Query(query): Query<SlugQuery>) -> Json<SlugResponse> {
    Json(SlugResponse { slug: generate_slug(&query.title) })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
