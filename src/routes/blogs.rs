//! Blog routes — list, profile by slug, and the signed-in author's own blog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use super::RouteError;
use crate::api::types::{Blog, BlogImages, CreateBlog, Post, UpdateBlog};
use crate::session::AuthSession;
use crate::state::AppState;

/// `GET /api/blogs`.
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, RouteError> {
    Ok(Json(state.api.list_blogs().await?))
}

/// `POST /api/blogs` — create the author's blog.
pub async fn create_blog(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(input): Json<CreateBlog>,
) -> Result<(StatusCode, Json<Blog>), RouteError> {
    if input.title.trim().is_empty() {
        return Err(RouteError::BadRequest("Blog title is required"));
    }
    let blog = state.api.create_blog(&auth.token, &input).await?;
    tracing::info!(blog = %blog.slug, author = ?auth.user_name, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}

/// `GET /api/blogs/me` — `{ "blog": null }` until the author creates one.
pub async fn my_blog(State(state): State<AppState>, auth: AuthSession) -> Result<Json<serde_json::Value>, RouteError> {
    let blog = state.api.my_blog(&auth.token).await?;
    Ok(Json(json!({ "blog": blog })))
}

/// `PATCH /api/blogs/me` — cover and profile image URLs.
pub async fn update_my_blog_images(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(images): Json<BlogImages>,
) -> Result<Json<serde_json::Value>, RouteError> {
    if images.cover_image.is_none() && images.profile_image.is_none() {
        return Err(RouteError::BadRequest("Nothing to update"));
    }
    Ok(Json(state.api.update_my_blog_images(&auth.token, &images).await?))
}

/// `PATCH /api/blogs/{id}`.
pub async fn update_blog(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
    Json(input): Json<UpdateBlog>,
) -> Result<Json<Blog>, RouteError> {
    Ok(Json(state.api.update_blog(&auth.token, &id, &input).await?))
}

/// `DELETE /api/blogs/{id}`.
pub async fn delete_blog(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Result<StatusCode, RouteError> {
    state.api.delete_blog(&auth.token, &id).await?;
    tracing::info!(blog_id = %id, "blog deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/blogs/public/{slug}`.
pub async fn public_blog(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<Blog>, RouteError> {
    Ok(Json(state.api.public_blog(&slug).await?))
}

/// `GET /api/blogs/public/{slug}/posts`.
pub async fn public_blog_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Post>>, RouteError> {
    Ok(Json(state.api.public_blog_posts(&slug).await?))
}
