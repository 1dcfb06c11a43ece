//! Post and comment routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::RouteError;
use crate::api::types::{
    Comment, CreateComment, CreatePost, CreatePostResponse, DeleteResponse, Envelope, PageQuery, Post, PostPage,
    UpdatePost,
};
use crate::session::{AuthSession, Session};
use crate::slug::generate_slug;
use crate::state::AppState;

/// Fill a missing or blank slug from the title.
pub(crate) fn with_slug(mut input: CreatePost) -> CreatePost {
    if input.slug.as_deref().is_none_or(|s| s.trim().is_empty()) {
        input.slug = Some(generate_slug(&input.title));
    }
    input
}

/// `GET /api/public/posts?page=&limit=`.
pub async fn public_posts(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Envelope<PostPage>>, RouteError> {
    Ok(Json(state.api.public_posts(page).await?))
}

/// `GET /api/public/popular`.
pub async fn popular(State(state): State<AppState>) -> Result<Json<serde_json::Value>, RouteError> {
    Ok(Json(state.api.popular().await?))
}

/// `GET /api/public/featured` — never fails; degrades to an empty list.
pub async fn featured(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.api.featured().await)
}

/// `GET /api/public/post/{slug}`.
pub async fn public_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Envelope<Post>>, RouteError> {
    Ok(Json(state.api.public_post(&slug).await?))
}

/// `GET /api/posts` — the signed-in author's posts.
pub async fn my_posts(State(state): State<AppState>, auth: AuthSession) -> Result<Json<Envelope<Vec<Post>>>, RouteError> {
    Ok(Json(state.api.my_posts(&auth.token).await?))
}

/// `POST /api/posts`.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(input): Json<CreatePost>,
) -> Result<(StatusCode, Json<CreatePostResponse>), RouteError> {
    let input = with_slug(input);
    let created = state.api.create_post(&auth.token, &input).await?;
    tracing::info!(post_id = %created.post.id, slug = %created.post.slug, author = ?auth.user_name, "post created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/posts/{id}`.
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Envelope<Post>>, RouteError> {
    Ok(Json(state.api.update_post(&auth.token, &id, &input).await?))
}

/// `DELETE /api/posts/{id}`.
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, RouteError> {
    let resp = state.api.delete_post(&auth.token, &id).await?;
    tracing::info!(post_id = %id, success = resp.success, "post delete");
    Ok(Json(resp))
}

/// `GET /api/posts/{id}/comments` — open to anonymous readers.
pub async fn comments(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Comment>>, RouteError> {
    Ok(Json(state.api.comments(session.token.as_deref(), &post_id).await?))
}

/// `POST /api/posts/{id}/comments`.
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(post_id): Path<String>,
    Json(input): Json<CreateComment>,
) -> Result<(StatusCode, Json<Comment>), RouteError> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(RouteError::BadRequest("Comment cannot be empty"));
    }
    let comment = state
        .api
        .add_comment(&auth.token, &post_id, &CreateComment { content: content.to_owned() })
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
