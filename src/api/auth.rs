//! Credential exchange with the remote API.

use super::types::{AuthResponse, ForgotPasswordInput, LoginInput, RegisterInput, ResetPasswordInput};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// `POST /auth/register`. The response body is passed through untouched.
    pub async fn register(&self, input: &RegisterInput) -> Result<serde_json::Value, ApiError> {
        self.send_json(self.post(&["auth", "register"]).json(input), None, "Registration failed")
            .await
    }

    /// `POST /auth/login` — returns the bearer token for the `accessToken` cookie.
    pub async fn login(&self, input: &LoginInput) -> Result<AuthResponse, ApiError> {
        self.send_json(self.post(&["auth", "login"]).json(input), None, "Login failed")
            .await
    }

    /// `POST /auth/forgot-password`.
    pub async fn forgot_password(&self, input: &ForgotPasswordInput) -> Result<serde_json::Value, ApiError> {
        self.send_json(
            self.post(&["auth", "forgot-password"]).json(input),
            None,
            "Failed to send reset email",
        )
        .await
    }

    /// `POST /auth/reset-password`. Only the status matters.
    pub async fn reset_password(&self, input: &ResetPasswordInput) -> Result<(), ApiError> {
        self.send_unit(
            self.post(&["auth", "reset-password"]).json(input),
            None,
            "Invalid or expired code",
        )
        .await
    }
}
