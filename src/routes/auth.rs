//! Auth routes — credential exchange with the remote API and session cookies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use super::RouteError;
use crate::api::types::{ForgotPasswordInput, LoginInput, RegisterInput, ResetPasswordInput};
use crate::session::{
    ACCESS_TOKEN_COOKIE, Session, SessionInfo, USER_NAME_COOKIE, access_token_cookie, clear_cookie, user_name_cookie,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub user_name: String,
}

/// Display name when the remote API does not send one: the email's local part.
pub(crate) fn fallback_user_name(email: &str) -> String {
    email.split('@').next().unwrap_or_default().trim().to_owned()
}

/// `POST /api/auth/login` — exchange credentials, set `accessToken` and `userName`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginResult>), RouteError> {
    let resp = state.api.login(&input).await?;
    let user_name = resp
        .user_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| fallback_user_name(&input.email));

    tracing::info!(user = %user_name, "login succeeded");

    let secure = state.cookie_secure();
    let jar = jar
        .add(access_token_cookie(resp.access_token, secure))
        .add(user_name_cookie(user_name.clone(), secure));
    Ok((jar, Json(LoginResult { user_name })))
}

/// `POST /api/auth/register` — create an account; the remote body is passed through.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<serde_json::Value>, RouteError> {
    if input.email.trim().is_empty() || input.password.is_empty() || input.user_name.trim().is_empty() {
        return Err(RouteError::BadRequest("Email, password and user name are required"));
    }
    Ok(Json(state.api.register(&input).await?))
}

/// `POST /api/auth/logout` — expire both session cookies.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let secure = state.cookie_secure();
    let jar = jar
        .add(clear_cookie(ACCESS_TOKEN_COOKIE, secure))
        .add(clear_cookie(USER_NAME_COOKIE, secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `POST /api/auth/forgot-password` — ask the remote API to mail a reset link.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(input): Json<ForgotPasswordInput>,
) -> Result<Json<serde_json::Value>, RouteError> {
    if input.email.trim().is_empty() {
        return Err(RouteError::BadRequest("Email is required"));
    }
    match state.api.forgot_password(&input).await {
        Ok(body) => Ok(Json(body)),
        Err(e) if e.status() == Some(404) => Err(RouteError::NotFound("Email unrecognized")),
        Err(e) => Err(e.into()),
    }
}

/// `POST /api/auth/reset-password` — set a new password with the mailed code.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordInput>,
) -> Result<StatusCode, RouteError> {
    if input.token.trim().is_empty() || input.new_password.is_empty() {
        return Err(RouteError::BadRequest("Reset code and new password are required"));
    }
    state.api.reset_password(&input).await?;
    tracing::info!("password reset");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/session` — whether the browser holds a session, and for whom.
pub async fn session(session: Session) -> Json<SessionInfo> {
    Json(SessionInfo::from(&session))
}
