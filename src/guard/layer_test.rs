use super::*;
use crate::guard::RedirectTarget;
use crate::state::test_helpers::{no_redirect_client, spawn_router};
use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;

// =============================================================================
// RouteGuard::evaluate
// =============================================================================

#[test]
fn out_of_scope_paths_skip_classification() {
    // Coarse would redirect "/dashboards", but the default matcher never sees it.
    let guard = RouteGuard::new(GuardPolicy::Coarse, Matcher::default());
    assert_eq!(guard.evaluate("/dashboards", None), RouteDecision::Allow);
}

#[test]
fn in_scope_paths_are_classified() {
    let guard = RouteGuard::default();
    assert_eq!(
        guard.evaluate("/dashboard/settings", None),
        RouteDecision::RedirectTo(RedirectTarget::Login)
    );
    assert_eq!(
        guard.evaluate("/login", Some("tok")),
        RouteDecision::RedirectTo(RedirectTarget::Dashboard)
    );
}

#[test]
fn empty_cookie_value_counts_as_anonymous() {
    let guard = RouteGuard::default();
    assert_eq!(guard.evaluate("/login", Some("")), RouteDecision::Allow);
}

#[test]
fn trailing_slash_is_ignored() {
    let guard = RouteGuard::default();
    assert_eq!(guard.evaluate("/dashboard/", None), RouteDecision::Allow);
    assert_eq!(
        guard.evaluate("/dashboard/settings/", None),
        RouteDecision::RedirectTo(RedirectTarget::Login)
    );
    assert_eq!(
        guard.evaluate("/login/", Some("tok")),
        RouteDecision::RedirectTo(RedirectTarget::Dashboard)
    );
    assert_eq!(
        guard.evaluate("/register/", Some("tok")),
        RouteDecision::RedirectTo(RedirectTarget::Dashboard)
    );
}

#[test]
fn coarse_policy_still_protects_dashboard_root_with_slash() {
    let guard = RouteGuard::new(GuardPolicy::Coarse, Matcher::default());
    assert_eq!(guard.evaluate("/dashboard/", None), RouteDecision::RedirectTo(RedirectTarget::Login));
}

#[test]
fn custom_matcher_narrows_scope() {
    let guard = RouteGuard::new(GuardPolicy::Fine, Matcher::from_patterns(["/login"]).unwrap());
    assert_eq!(guard.evaluate("/dashboard/settings", None), RouteDecision::Allow);
}

// =============================================================================
// middleware
// =============================================================================

fn guarded_router(guard: RouteGuard) -> Router {
    Router::new()
        .route("/dashboard", get(|| async { "dashboard" }))
        .route("/dashboard/{*rest}", get(|| async { "dashboard page" }))
        .route("/login", get(|| async { "login" }))
        .layer(axum::middleware::from_fn_with_state(guard, route_guard))
}

#[tokio::test]
async fn anonymous_subpage_visit_is_redirected_to_login() {
    let base = spawn_router(guarded_router(RouteGuard::default())).await;
    let resp = no_redirect_client()
        .get(format!("{base}/dashboard/settings"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn signed_in_login_visit_is_redirected_to_dashboard() {
    let base = spawn_router(guarded_router(RouteGuard::default())).await;
    let resp = no_redirect_client()
        .get(format!("{base}/login"))
        .header(header::COOKIE, "accessToken=abc")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/dashboard");
}

#[tokio::test]
async fn allowed_request_reaches_the_handler() {
    let base = spawn_router(guarded_router(RouteGuard::default())).await;
    let resp = no_redirect_client()
        .get(format!("{base}/dashboard/settings"))
        .header(header::COOKIE, "accessToken=abc; theme=dark")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "dashboard page");
}

#[tokio::test]
async fn coarse_policy_protects_dashboard_root() {
    let base = spawn_router(guarded_router(RouteGuard::new(GuardPolicy::Coarse, Matcher::default()))).await;
    let resp = no_redirect_client()
        .get(format!("{base}/dashboard"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/login");
}
