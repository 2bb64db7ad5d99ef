use crate::e2e::helpers::fixtures::{hourly_items, rss_document, FixtureItem};
use crate::e2e::helpers::{TestContext, TestOptions};
use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use newsdesk_backend::domain::news::{FeedCatalog, FeedSource, Region};
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn newest() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

async fn serve_feed(server: &MockServer, route: &str, body: String, delay: Option<Duration>) {
    let mut response = ResponseTemplate::new(200)
        .insert_header("content-type", "application/rss+xml")
        .set_body_string(body);
    if let Some(delay) = delay {
        response = response.set_delay(delay);
    }
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

fn source(server: &MockServer, name: &str, route: &str, category: &str) -> FeedSource {
    FeedSource::new(name, format!("{}{}", server.uri(), route), category)
}

fn dates(articles: &Value) -> Vec<DateTime<Utc>> {
    articles
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["date"].as_str().unwrap().parse().unwrap())
        .collect()
}

#[tokio::test]
async fn it_should_skip_slow_and_failing_feeds() {
    let server = MockServer::start().await;
    serve_feed(
        &server,
        "/fast.xml",
        rss_document("Fast Daily", &hourly_items("fast", 3, newest())),
        None,
    )
    .await;
    serve_feed(
        &server,
        "/slow.xml",
        rss_document("Slow Times", &hourly_items("slow", 3, newest())),
        Some(Duration::from_secs(5)),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken.xml"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let catalog = FeedCatalog::new(HashMap::from([(
        Region::Nigerian,
        vec![
            source(&server, "Fast Daily", "/fast.xml", "Nigeria"),
            source(&server, "Slow Times", "/slow.xml", "Nigeria"),
            source(&server, "Broken Wire", "/broken.xml", "Nigeria"),
        ],
    )]));
    let ctx = TestContext::with_options(TestOptions {
        catalog,
        feed_timeout: Duration::from_millis(100),
        ..Default::default()
    })
    .await;

    let started = Instant::now();
    let response = ctx.get("/api/news/nigerian").await;
    let elapsed = started.elapsed();

    response.assert_status(StatusCode::OK);
    let articles = response.json();
    let titles: Vec<_> = articles
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(titles, vec!["fast story 0", "fast story 1", "fast story 2"]);
    assert!(elapsed < Duration::from_secs(2), "took {:?}", elapsed);
    assert_eq!(articles[0]["author"], "Fast Daily");
    assert_eq!(articles[0]["externalLink"], "https://fast.example.com/story-0");
}

#[tokio::test]
async fn it_should_return_an_empty_list_when_every_feed_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let catalog = FeedCatalog::new(HashMap::from([(
        Region::Ghana,
        vec![
            source(&server, "Down One", "/one.xml", "Ghana"),
            source(&server, "Down Two", "/two.xml", "Ghana"),
        ],
    )]));
    let ctx = TestContext::with_options(TestOptions {
        catalog,
        ..Default::default()
    })
    .await;

    let response = ctx.get("/api/news/ghana").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json(), Value::Array(vec![]));
}

#[tokio::test]
async fn it_should_merge_sort_and_cap_articles() {
    let server = MockServer::start().await;
    let half_hour = chrono::Duration::minutes(30);
    serve_feed(
        &server,
        "/a.xml",
        rss_document("Feed A", &hourly_items("a", 30, newest())),
        None,
    )
    .await;
    serve_feed(
        &server,
        "/b.xml",
        rss_document("Feed B", &hourly_items("b", 30, newest() - half_hour)),
        None,
    )
    .await;

    let catalog = FeedCatalog::new(HashMap::from([(
        Region::World,
        vec![
            source(&server, "Feed A", "/a.xml", "World"),
            source(&server, "Feed B", "/b.xml", "World"),
        ],
    )]));
    let ctx = TestContext::with_options(TestOptions {
        catalog,
        ..Default::default()
    })
    .await;

    let articles = ctx.get("/api/news/world").await.json();
    let dates = dates(&articles);

    assert_eq!(dates.len(), 50);
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(dates[0], newest());
    assert_eq!(articles[1]["title"], "b story 0");

    let limited = ctx.get("/api/news/world?limit=5").await.json();
    assert_eq!(limited.as_array().unwrap().len(), 5);

    let capped = ctx.get("/api/news/world?limit=500").await.json();
    assert_eq!(capped.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn it_should_pick_images_or_fall_back() {
    let server = MockServer::start().await;
    let items = vec![
        FixtureItem::new("Election results", "https://img.example.com/1", Some(newest()))
            .with_image("https://cdn.example.com/photos/ballot.jpg"),
        FixtureItem::new("Quiet day", "https://img.example.com/2", Some(newest())),
    ];
    serve_feed(&server, "/img.xml", rss_document("Pictures", &items), None).await;

    let catalog = FeedCatalog::new(HashMap::from([(
        Region::Kenya,
        vec![source(&server, "Pictures", "/img.xml", "Kenya")],
    )]));
    let ctx = TestContext::with_options(TestOptions {
        catalog,
        ..Default::default()
    })
    .await;

    let articles = ctx.get("/api/news/kenya").await.json();
    let by_title = |title: &str| {
        articles
            .as_array()
            .unwrap()
            .iter()
            .find(|a| a["title"] == title)
            .cloned()
            .unwrap()
    };

    assert_eq!(
        by_title("Election results")["image"],
        "https://cdn.example.com/photos/ballot.jpg"
    );
    let fallback = by_title("Quiet day")["image"].as_str().unwrap().to_string();
    assert!(fallback.starts_with("https://images.unsplash.com/"));
}

#[tokio::test]
async fn it_should_combine_regions_on_the_homepage() {
    let server = MockServer::start().await;
    serve_feed(
        &server,
        "/uk.xml",
        rss_document("UK Wire", &hourly_items("uk", 2, newest())),
        None,
    )
    .await;
    serve_feed(
        &server,
        "/usa.xml",
        rss_document("US Wire", &hourly_items("usa", 2, newest())),
        None,
    )
    .await;

    let catalog = FeedCatalog::new(HashMap::from([
        (Region::Uk, vec![source(&server, "UK Wire", "/uk.xml", "UK")]),
        (Region::Usa, vec![source(&server, "US Wire", "/usa.xml", "USA")]),
    ]));
    let ctx = TestContext::with_options(TestOptions {
        catalog,
        ..Default::default()
    })
    .await;

    let homepage = ctx.get("/api/news/homepage").await;
    homepage.assert_status(StatusCode::OK);
    assert_eq!(homepage.json().as_array().unwrap().len(), 4);

    let alias = ctx.get("/news-feed?limit=3").await;
    alias.assert_status(StatusCode::OK);
    assert_eq!(alias.json().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn it_should_404_on_unknown_regions() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/api/news/atlantis").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
