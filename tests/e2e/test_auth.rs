use crate::e2e::helpers::TestContext;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn it_should_login_with_the_default_admin() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post(
            "/api/auth/login",
            json!({ "username": "admin", "password": "admin123" }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json();
    assert!(body["token"].as_str().unwrap().len() > 20);
    assert_eq!(body["expires_in"], 3600);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["is_admin"], true);
    assert!(body["user"].get("password_hash").is_none());

    let token = body["token"].as_str().unwrap();
    let me = ctx
        .request(Method::GET, "/api/auth/me", None, Some(token))
        .await;
    me.assert_status(StatusCode::OK);
    assert_eq!(me.json()["username"], "admin");
}

#[tokio::test]
async fn it_should_reject_bad_credentials_with_400() {
    let ctx = TestContext::new().await;

    for body in [
        json!({ "username": "admin", "password": "nope" }),
        json!({ "username": "ghost", "password": "admin123" }),
    ] {
        let response = ctx.post("/api/auth/login", body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["message"], "Invalid credentials");
    }

    let response = ctx.post("/api/auth/login", json!({ "username": "admin" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_guard_admin_routes() {
    let ctx = TestContext::new().await;
    let article = json!({ "title": "Guarded" });

    let response = ctx.post("/api/articles", article.clone()).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "No token, authorization denied");

    let response = ctx
        .request(Method::POST, "/api/articles", Some(article.clone()), Some("not-a-jwt"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Token is not valid");

    let reader = ctx.reader_token().await;
    let response = ctx
        .request(Method::POST, "/api/articles", Some(article), Some(&reader))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json()["message"], "Admin access required");
}

#[tokio::test]
async fn it_should_accept_the_legacy_token_header() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/auth/me")
        .header("x-auth-token", token)
        .body(axum::body::Body::empty())
        .unwrap();

    use tower::ServiceExt;
    let response = ctx.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn it_should_answer_malformed_bodies_with_a_json_message() {
    let ctx = TestContext::new().await;

    for (content_type, body) in [
        ("application/json", "{not json"),
        ("application/json", r#"{"username": 42}"#),
        ("text/plain", r#"{"username": "admin", "password": "admin123"}"#),
    ] {
        let response = ctx.post_raw("/api/auth/login", content_type, body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.json()["message"].as_str().is_some_and(|m| !m.is_empty()),
            "no message for {:?}: {}",
            body,
            response.text()
        );
    }

    let response = ctx.get("/api/news/world?limit=lots").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json()["message"].is_string());
}
