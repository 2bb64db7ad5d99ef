use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsdesk_backend::controllers::{
    article::ArticleController, auth::AuthController, comment::CommentController,
    news::NewsController, notification::NotificationController, push::PushController,
    rss::RssController, youtube::YouTubeController,
};
use newsdesk_backend::domain::article::{ArticleService, ArticleServiceApi};
use newsdesk_backend::domain::auth::{AuthService, JwtManager};
use newsdesk_backend::domain::comment::CommentService;
use newsdesk_backend::domain::news::{FeedAggregator, FeedCatalog, NewsService};
use newsdesk_backend::domain::notification::{NotificationSender, NotificationService, NullSender};
use newsdesk_backend::domain::push::{PushGateway, PushService};
use newsdesk_backend::domain::syndication::ChannelInfo;
use newsdesk_backend::domain::youtube::{YouTubeApi, YouTubeService};
use newsdesk_backend::infrastructure::config::{Config, LogFormat};
use newsdesk_backend::infrastructure::db::{check_connection, create_pool, initialize_schema};
use newsdesk_backend::infrastructure::feeds::HttpFeedFetcher;
use newsdesk_backend::infrastructure::firebase::FirebaseSender;
use newsdesk_backend::infrastructure::http::{build_router, start_http_server, HttpDependencies};
use newsdesk_backend::infrastructure::repositories::{
    ArticleRepository, CommentRepository, JsonSubscriptionRepository, PgArticleRepository,
    PgUserRepository, SubscriptionRepository, UserRepository,
};
use newsdesk_backend::infrastructure::webpush::VapidPushGateway;
use newsdesk_backend::infrastructure::youtube::YouTubeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Newsdesk Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    initialize_schema(&pool).await?;
    tracing::info!("Database connection verified, schema ready");

    tokio::fs::create_dir_all(&config.data_dir).await?;

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool and data files)
    tracing::info!("Instantiating repositories...");
    let article_repo: Arc<dyn ArticleRepository> = Arc::new(PgArticleRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(config.data_dir.join("comments.json")));
    let subscription_repo: Arc<dyn SubscriptionRepository> = Arc::new(
        JsonSubscriptionRepository::new(config.data_dir.join("subscriptions.json")),
    );

    // 2. Instantiate outbound clients
    tracing::info!("Instantiating clients...");
    let feed_timeout = Duration::from_millis(config.feed_timeout_ms);
    let feed_fetcher = Arc::new(HttpFeedFetcher::new(feed_timeout)?);

    let notification_sender: Arc<dyn NotificationSender> = match config.firebase.clone() {
        Some(credentials) => {
            tracing::info!(project_id = %credentials.project_id, "Firebase Cloud Messaging enabled");
            Arc::new(FirebaseSender::new(credentials)?)
        }
        None => {
            tracing::warn!("Firebase not configured, notifications will only be logged");
            Arc::new(NullSender)
        }
    };

    let push_gateway: Option<Arc<dyn PushGateway>> = match &config.vapid {
        Some(vapid) => Some(Arc::new(VapidPushGateway::new(vapid)?)),
        None => {
            tracing::warn!("VAPID keys not configured, Web Push disabled");
            None
        }
    };

    let youtube_api: Option<Arc<dyn YouTubeApi>> = match config.youtube_api_key.clone() {
        Some(api_key) => Some(Arc::new(YouTubeClient::new(api_key)?)),
        None => {
            tracing::warn!("YOUTUBE_API_KEY not set, trending videos unavailable");
            None
        }
    };

    // 3. Instantiate services (inject repositories and clients)
    tracing::info!("Instantiating services...");
    let cache_ttl = Duration::from_secs(config.news_cache_ttl_secs);
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        JwtManager::new(config.jwt_secret.clone(), config.jwt_expiration_hours),
        config.bcrypt_cost,
    ));
    let article_service: Arc<dyn ArticleServiceApi> =
        Arc::new(ArticleService::new(article_repo.clone()));
    let news_service = Arc::new(NewsService::new(
        FeedCatalog::builtin(),
        FeedAggregator::new(feed_fetcher, feed_timeout),
        cache_ttl,
        Duration::from_secs(config.homepage_timeout_secs),
    ));
    let comment_service = Arc::new(CommentService::new(comment_repo));
    let push_service = Arc::new(PushService::new(subscription_repo, push_gateway));
    let notification_service = Arc::new(NotificationService::new(notification_sender));
    let youtube_service = Arc::new(YouTubeService::new(youtube_api, cache_ttl));

    // 4. Seed the first admin account
    auth_service.ensure_default_admin().await?;

    // 5. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let deps = HttpDependencies {
        article_repo,
        auth_service: auth_service.clone(),
        auth_controller: Arc::new(AuthController::new(auth_service)),
        article_controller: Arc::new(ArticleController::new(article_service.clone())),
        news_controller: Arc::new(NewsController::new(news_service)),
        rss_controller: Arc::new(RssController::new(
            article_service,
            ChannelInfo {
                site_name: config.site_name.clone(),
                site_url: config.site_url.clone(),
            },
        )),
        comment_controller: Arc::new(CommentController::new(comment_service)),
        push_controller: Arc::new(PushController::new(push_service.clone())),
        notification_controller: Arc::new(NotificationController::new(
            notification_service,
            push_service,
        )),
        youtube_controller: Arc::new(YouTubeController::new(youtube_service)),
    };

    // Start HTTP server with all routes
    start_http_server(&config, build_router(deps)).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "newsdesk_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "newsdesk_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
