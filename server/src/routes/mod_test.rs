use super::*;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn legacy_login_redirects_to_auth_route() {
    let resp = redirect_login().await.into_response();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/auth/login");
}

#[tokio::test]
async fn legacy_register_redirects_to_auth_route() {
    let resp = redirect_register().await.into_response();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/auth/register");
}
