//! Blog endpoints — one blog per author, public profiles by slug.

use super::types::{Blog, BlogImages, CreateBlog, MyBlogEnvelope, Post, UpdateBlog};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /blogs` — every public blog.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        self.send_json(self.get(&["blogs"]), None, "Failed to fetch public blogs")
            .await
    }

    /// `GET /blogs/me` — `None` until the author has created a blog, or when
    /// a 2xx body cannot be read.
    pub async fn my_blog(&self, token: &str) -> Result<Option<Blog>, ApiError> {
        let (status, body) = self.execute(self.get(&["blogs", "me"]), Some(token)).await?;
        if !(200..300).contains(&status) {
            return Err(super::status_error(status, &body, "Failed to fetch blog"));
        }
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<MyBlogEnvelope>(&body) {
            Ok(envelope) => Ok(envelope.blog),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable blog body; treating as no blog");
                Ok(None)
            }
        }
    }

    /// `POST /blogs`.
    pub async fn create_blog(&self, token: &str, input: &CreateBlog) -> Result<Blog, ApiError> {
        self.send_json(self.post(&["blogs"]).json(input), Some(token), "Failed to create blog")
            .await
    }

    /// `PATCH /blogs/{id}`.
    pub async fn update_blog(&self, token: &str, id: &str, input: &UpdateBlog) -> Result<Blog, ApiError> {
        self.send_json(self.patch(&["blogs", id]).json(input), Some(token), "Failed to update blog")
            .await
    }

    /// `DELETE /blogs/{id}`.
    pub async fn delete_blog(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.delete(&["blogs", id]), Some(token), "Failed to delete blog")
            .await
    }

    /// `PATCH /blogs/me` — cover and profile image URLs.
    pub async fn update_my_blog_images(&self, token: &str, images: &BlogImages) -> Result<serde_json::Value, ApiError> {
        self.send_json(self.patch(&["blogs", "me"]).json(images), Some(token), "Update failed")
            .await
    }

    /// `GET /blogs/public/{slug}`.
    pub async fn public_blog(&self, slug: &str) -> Result<Blog, ApiError> {
        self.send_json(self.get(&["blogs", "public", slug]), None, "Blog profile not found")
            .await
    }

    /// `GET /posts/public/blog/{slug}`. A blog with no posts may answer 404,
    /// so any non-success status reads as an empty list.
    pub async fn public_blog_posts(&self, slug: &str) -> Result<Vec<Post>, ApiError> {
        let (status, body) = self
            .execute(self.get(&["posts", "public", "blog", slug]), None)
            .await?;
        if !(200..300).contains(&status) {
            tracing::debug!(%slug, status, "blog posts unavailable, returning empty list");
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
