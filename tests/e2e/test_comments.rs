use crate::e2e::helpers::TestContext;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn it_should_create_list_and_like_comments() {
    let ctx = TestContext::new().await;

    let first = ctx
        .post(
            "/api/comments",
            json!({ "articleId": "42", "author": "Ada", "content": "First!" }),
        )
        .await;
    first.assert_status(StatusCode::CREATED);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let second = ctx
        .post("/api/comments", json!({ "articleId": "42", "content": "Second" }))
        .await;
    second.assert_status(StatusCode::CREATED);
    assert_eq!(second.json()["author"], "Anonymous");

    ctx.post("/api/comments", json!({ "articleId": "7", "content": "Elsewhere" }))
        .await
        .assert_status(StatusCode::CREATED);

    let listed = ctx.get("/api/comments?articleId=42").await.json();
    let contents: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Second", "First!"]);

    let id = first.json()["id"].as_str().unwrap().to_string();
    let liked = ctx.post(&format!("/api/comments/{}/like", id), json!({})).await;
    liked.assert_status(StatusCode::OK);
    assert_eq!(liked.json()["likes"], 1);

    ctx.post("/api/comments/unknown/like", json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_validate_comments() {
    let ctx = TestContext::new().await;

    ctx.post("/api/comments", json!({ "content": "orphan" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.post("/api/comments", json!({ "articleId": "1", "content": "   " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
