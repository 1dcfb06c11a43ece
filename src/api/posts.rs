//! Post endpoints — public listings and the author's own posts.

use super::types::{CreatePost, CreatePostResponse, DeleteResponse, Envelope, PageQuery, Post, PostPage, UpdatePost};
use super::{ApiClient, ApiError};

const VALIDATION_FAILED: &str = "Validation failed";

impl ApiClient {
    /// `GET /public/popular`. Shape is owned by the remote API.
    pub async fn popular(&self) -> Result<serde_json::Value, ApiError> {
        self.send_json(self.get(&["public", "popular"]), None, "Failed to load popular posts")
            .await
    }

    /// `GET /public/featured`. Editor picks are decorative, so any failure
    /// degrades to `{ "data": [] }`.
    pub async fn featured(&self) -> serde_json::Value {
        match self
            .send_json(self.get(&["public", "featured"]), None, "Failed to fetch editor picks")
            .await
        {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "featured posts unavailable");
                serde_json::json!({ "data": [] })
            }
        }
    }

    /// `GET /public?page=&limit=`.
    pub async fn public_posts(&self, page: PageQuery) -> Result<Envelope<PostPage>, ApiError> {
        self.send_json(self.get(&["public"]).query(&page), None, "Failed to fetch public posts")
            .await
    }

    /// `GET /public/post/{slug}`.
    pub async fn public_post(&self, slug: &str) -> Result<Envelope<Post>, ApiError> {
        self.send_json(self.get(&["public", "post", slug]), None, "Post not found")
            .await
    }

    /// `GET /posts` — the signed-in author's posts.
    pub async fn my_posts(&self, token: &str) -> Result<Envelope<Vec<Post>>, ApiError> {
        self.send_json(self.get(&["posts"]), Some(token), "Failed to fetch posts")
            .await
    }

    /// `POST /posts`. A 422 keeps the remote field-level `details`.
    pub async fn create_post(&self, token: &str, input: &CreatePost) -> Result<CreatePostResponse, ApiError> {
        match self
            .send_json(self.post(&["posts"]).json(input), Some(token), "Failed to create post")
            .await
        {
            Err(ApiError::Status { status: 422, details, .. }) => {
                Err(ApiError::Status { status: 422, message: VALIDATION_FAILED.to_owned(), details })
            }
            other => other,
        }
    }

    /// `PATCH /posts/{id}`.
    pub async fn update_post(&self, token: &str, id: &str, input: &UpdatePost) -> Result<Envelope<Post>, ApiError> {
        self.send_json(self.patch(&["posts", id]).json(input), Some(token), "Failed to update post")
            .await
    }

    /// `DELETE /posts/{id}`.
    pub async fn delete_post(&self, token: &str, id: &str) -> Result<DeleteResponse, ApiError> {
        self.send_json(self.delete(&["posts", id]), Some(token), "Failed to delete post")
            .await
    }
}
