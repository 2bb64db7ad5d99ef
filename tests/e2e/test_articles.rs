use crate::e2e::helpers::{TestContext, SITE_URL};
use axum::http::{Method, StatusCode};
use chrono::{Duration, TimeZone, Utc};
use newsdesk_backend::domain::article::NewArticle;
use newsdesk_backend::infrastructure::repositories::ArticleRepository;
use rss::Channel;
use serde_json::{json, Value};

async fn create(ctx: &TestContext, token: &str, body: Value) -> Value {
    let response = ctx
        .request(Method::POST, "/api/articles", Some(body), Some(token))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn it_should_run_the_article_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let created = create(
        &ctx,
        &token,
        json!({
            "title": "Senate passes budget",
            "content": "<p>The senate passed the budget on Tuesday.</p>",
            "category": "Politics"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["author"], "admin");
    assert_eq!(created["source"], "admin");
    assert_eq!(created["status"], "published");
    assert_eq!(created["read_time"], "1 min read");

    let fetched = ctx.get(&format!("/api/articles/{}", id)).await;
    fetched.assert_status(StatusCode::OK);
    assert_eq!(fetched.json()["title"], "Senate passes budget");

    let updated = ctx
        .request(
            Method::PUT,
            &format!("/api/articles/{}", id),
            Some(json!({ "featured": true })),
            Some(&token),
        )
        .await;
    updated.assert_status(StatusCode::OK);
    assert_eq!(updated.json()["featured"], true);
    assert_eq!(updated.json()["category"], "Politics");

    let featured = ctx.get("/api/articles/featured").await;
    assert_eq!(featured.json().as_array().unwrap().len(), 1);

    let deleted = ctx
        .request(Method::DELETE, &format!("/api/articles/{}", id), None, Some(&token))
        .await;
    deleted.assert_status(StatusCode::OK);

    ctx.get(&format!("/api/articles/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.request(Method::DELETE, &format!("/api/articles/{}", id), None, Some(&token))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_require_a_title() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let response = ctx
        .request(
            Method::POST,
            "/api/articles",
            Some(json!({ "content": "No title" })),
            Some(&token),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Title is required");
}

#[tokio::test]
async fn it_should_filter_articles_by_category_and_status() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    create(&ctx, &token, json!({ "title": "A", "category": "Sports", "date": "2024-01-01T10:00:00Z" })).await;
    create(&ctx, &token, json!({ "title": "B", "category": "sports", "date": "2024-01-02T10:00:00Z" })).await;
    create(&ctx, &token, json!({ "title": "C", "category": "Business", "status": "draft" })).await;

    let sports = ctx.get("/api/articles?category=SPORTS").await.json();
    let titles: Vec<_> = sports
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["B", "A"]);

    let drafts = ctx.get("/api/articles?status=draft").await.json();
    assert_eq!(drafts.as_array().unwrap().len(), 1);

    let limited = ctx.get("/api/articles?limit=1").await.json();
    assert_eq!(limited.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn it_should_serve_category_rss_feeds() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    create(&ctx, &token, json!({
        "title": "Cup final & extra time",
        "excerpt": "Penalties <again>",
        "category": "Sports, Football",
        "image": "https://cdn.example.com/final.jpg"
    }))
    .await;
    create(&ctx, &token, json!({ "title": "Rates unchanged", "category": "Business" })).await;
    create(&ctx, &token, json!({ "title": "Unfiled" })).await;
    create(&ctx, &token, json!({ "title": "Hidden", "category": "Sports", "status": "draft" })).await;

    let response = ctx.get("/rss/sports.xml").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.headers.get("content-type").unwrap(),
        "application/rss+xml; charset=utf-8"
    );

    let xml = response.text();
    assert!(xml.contains(&format!("{}/rss/sports.xml", SITE_URL)));
    let feed = Channel::read_from(xml.as_bytes()).unwrap();
    assert_eq!(feed.items().len(), 1);
    let item = &feed.items()[0];
    assert_eq!(item.title(), Some("Cup final & extra time"));
    assert_eq!(item.description(), Some("Penalties <again>"));
    assert_eq!(
        item.enclosure().map(|e| e.url()),
        Some("https://cdn.example.com/final.jpg")
    );

    let all = Channel::read_from(ctx.get("/rss/all.xml").await.text().as_bytes()).unwrap();
    let titles: Vec<_> = all.items().iter().filter_map(|i| i.title()).collect();
    assert!(titles.contains(&"Rates unchanged"));
    assert!(titles.contains(&"Unfiled"));
    assert!(!titles.contains(&"Hidden"));
    assert!(all
        .items()
        .iter()
        .any(|i| i.categories().iter().any(|c| c.name() == "General")));

    ctx.get("/rss/sports").await.assert_status(StatusCode::NOT_FOUND);
}

fn stored(title: &str, category: &str, minutes_after_new_year: i64) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        excerpt: None,
        content: None,
        category: Some(category.to_string()),
        image: None,
        read_time: "1 min read".to_string(),
        author: "admin".to_string(),
        source: "admin".to_string(),
        date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::minutes(minutes_after_new_year),
        featured: false,
        content_type: "article".to_string(),
        status: "published".to_string(),
    }
}

#[tokio::test]
async fn it_should_find_old_category_articles_behind_many_newer_ones() {
    let ctx = TestContext::new().await;
    ctx.articles
        .create(stored("Season opener", "Sports", 0))
        .await
        .unwrap();
    for i in 1..=120 {
        ctx.articles
            .create(stored(&format!("Markets {}", i), "Business", i))
            .await
            .unwrap();
    }

    let sports = Channel::read_from(ctx.get("/rss/sports.xml").await.text().as_bytes()).unwrap();
    let titles: Vec<_> = sports.items().iter().filter_map(|i| i.title()).collect();
    assert_eq!(titles, vec!["Season opener"]);

    let business =
        Channel::read_from(ctx.get("/rss/business.xml").await.text().as_bytes()).unwrap();
    assert_eq!(business.items().len(), 50);
    assert_eq!(business.items()[0].title(), Some("Markets 120"));
}
