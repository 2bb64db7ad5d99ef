use crate::e2e::helpers::TestContext;
use axum::http::StatusCode;

#[tokio::test]
async fn it_should_list_channels_and_categories_without_an_api_key() {
    let ctx = TestContext::new().await;

    let channels = ctx.get("/api/youtube/live-channels").await;
    channels.assert_status(StatusCode::OK);
    let channels = channels.json();
    assert!(!channels.as_array().unwrap().is_empty());
    assert!(channels
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["isLive"] == false));

    let categories = ctx.get("/api/youtube/categories").await.json();
    assert!(categories
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == "25"));
}

#[tokio::test]
async fn it_should_503_trending_without_an_api_key() {
    let ctx = TestContext::new().await;

    let response = ctx
        .get("/api/youtube/trending?regionCode=NG&categoryId=25&maxResults=20")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["message"], "YouTube API key not configured");
}
