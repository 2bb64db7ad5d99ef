use crate::e2e::helpers::TestContext;
use axum::http::StatusCode;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn it_should_answer_liveness() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "OK");
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn it_should_report_readiness_from_the_database() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/health/ready").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["database"], "connected");

    ctx.articles.offline.store(true, Ordering::SeqCst);
    let response = ctx.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["status"], "not_ready");
}
