//! Comment endpoints.

use super::types::{Comment, CreateComment};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /posts/{id}/comments`. Readers may be anonymous, so the token is optional.
    pub async fn comments(&self, token: Option<&str>, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.send_json(self.get(&["posts", post_id, "comments"]), token, "Failed to fetch comments")
            .await
    }

    /// `POST /posts/{id}/comments`.
    pub async fn add_comment(&self, token: &str, post_id: &str, input: &CreateComment) -> Result<Comment, ApiError> {
        self.send_json(
            self.post(&["posts", post_id, "comments"]).json(input),
            Some(token),
            "Failed to add comment",
        )
        .await
    }
}
