use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use newsdesk_backend::controllers::{
    article::ArticleController, auth::AuthController, comment::CommentController,
    news::NewsController, notification::NotificationController, push::PushController,
    rss::RssController, youtube::YouTubeController,
};
use newsdesk_backend::domain::article::{ArticleService, ArticleServiceApi};
use newsdesk_backend::domain::auth::{AuthService, JwtManager};
use newsdesk_backend::domain::comment::CommentService;
use newsdesk_backend::domain::news::{FeedAggregator, FeedCatalog, NewsService};
use newsdesk_backend::domain::notification::NotificationService;
use newsdesk_backend::domain::push::{PushGateway, PushService};
use newsdesk_backend::domain::syndication::ChannelInfo;
use newsdesk_backend::domain::youtube::YouTubeService;
use newsdesk_backend::infrastructure::feeds::HttpFeedFetcher;
use newsdesk_backend::infrastructure::http::{build_router, HttpDependencies};
use newsdesk_backend::infrastructure::repositories::{
    CommentRepository, JsonSubscriptionRepository, UserRepository,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

pub mod fakes;

use fakes::{MemoryArticleRepository, MemoryUserRepository, RecordingPushGateway, RecordingSender};

pub const JWT_SECRET: &str = "test-jwt-secret-key-for-testing-only";
pub const SITE_URL: &str = "https://newsdesk.test";

pub struct TestOptions {
    pub catalog: FeedCatalog,
    pub feed_timeout: Duration,
    pub homepage_ceiling: Duration,
    pub web_push: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            catalog: FeedCatalog::new(HashMap::new()),
            feed_timeout: Duration::from_secs(2),
            homepage_ceiling: Duration::from_secs(5),
            web_push: true,
        }
    }
}

pub struct TestContext {
    pub router: Router,
    pub articles: Arc<MemoryArticleRepository>,
    pub users: Arc<MemoryUserRepository>,
    pub push_gateway: Arc<RecordingPushGateway>,
    pub sender: Arc<RecordingSender>,
    pub jwt: JwtManager,
    _data_dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            self.text()
        );
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_options(TestOptions::default()).await
    }

    pub async fn with_options(options: TestOptions) -> Self {
        let data_dir = TempDir::new().unwrap();
        let articles = Arc::new(MemoryArticleRepository::default());
        let users = Arc::new(MemoryUserRepository::default());
        let push_gateway = Arc::new(RecordingPushGateway::default());
        let sender = Arc::new(RecordingSender::default());
        let jwt = JwtManager::new(JWT_SECRET.to_string(), 1);

        let auth_service = Arc::new(AuthService::new(users.clone(), jwt.clone(), 4));
        auth_service.ensure_default_admin().await.unwrap();

        let article_service: Arc<dyn ArticleServiceApi> =
            Arc::new(ArticleService::new(articles.clone()));

        let fetcher = Arc::new(HttpFeedFetcher::new(Duration::from_secs(10)).unwrap());
        let news_service = Arc::new(NewsService::new(
            options.catalog,
            FeedAggregator::new(fetcher, options.feed_timeout),
            Duration::from_secs(60),
            options.homepage_ceiling,
        ));

        let comment_service = Arc::new(CommentService::new(Arc::new(CommentRepository::new(
            data_dir.path().join("comments.json"),
        ))));

        let gateway: Option<Arc<dyn PushGateway>> = if options.web_push {
            Some(push_gateway.clone())
        } else {
            None
        };
        let push_service = Arc::new(PushService::new(
            Arc::new(JsonSubscriptionRepository::new(
                data_dir.path().join("subscriptions.json"),
            )),
            gateway,
        ));

        let notification_service = Arc::new(NotificationService::new(sender.clone()));
        let youtube_service = Arc::new(YouTubeService::new(None, Duration::from_secs(60)));

        let router = build_router(HttpDependencies {
            article_repo: articles.clone(),
            auth_service: auth_service.clone(),
            auth_controller: Arc::new(AuthController::new(auth_service)),
            article_controller: Arc::new(ArticleController::new(article_service.clone())),
            news_controller: Arc::new(NewsController::new(news_service)),
            rss_controller: Arc::new(RssController::new(
                article_service,
                ChannelInfo {
                    site_name: "Newsdesk".to_string(),
                    site_url: SITE_URL.to_string(),
                },
            )),
            comment_controller: Arc::new(CommentController::new(comment_service)),
            push_controller: Arc::new(PushController::new(push_service.clone())),
            notification_controller: Arc::new(NotificationController::new(
                notification_service,
                push_service,
            )),
            youtube_controller: Arc::new(YouTubeController::new(youtube_service)),
        });

        Self {
            router,
            articles,
            users,
            push_gateway,
            sender,
            jwt,
            _data_dir: data_dir,
        }
    }

    /// Token for the seeded default admin
    pub async fn admin_token(&self) -> String {
        let admin = self.users.find_by_username("admin").await.unwrap().unwrap();
        self.jwt.generate_token(&admin).unwrap()
    }

    /// Token for a valid account without admin rights
    pub async fn reader_token(&self) -> String {
        let reader = match self.users.find_by_username("reader").await.unwrap() {
            Some(user) => user,
            None => self.users.create("reader", "unused", false).await.unwrap(),
        };
        self.jwt.generate_token(&reader).unwrap()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// POST an arbitrary, possibly malformed, body
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }
}
