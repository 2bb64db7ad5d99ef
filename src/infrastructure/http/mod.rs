use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::ArticleRepository;
use crate::{
    controllers::{
        article::ArticleController, auth::AuthController, comment::CommentController, health,
        news::NewsController, notification::NotificationController, push::PushController,
        rss::RssController, youtube::YouTubeController,
    },
    domain::auth::AuthService,
    infrastructure::auth::{admin_middleware, request_id_middleware},
};

/// Everything the HTTP layer needs, wired up by `main`
pub struct HttpDependencies {
    pub article_repo: Arc<dyn ArticleRepository>,
    pub auth_service: Arc<AuthService>,
    pub auth_controller: Arc<AuthController>,
    pub article_controller: Arc<ArticleController>,
    pub news_controller: Arc<NewsController>,
    pub rss_controller: Arc<RssController>,
    pub comment_controller: Arc<CommentController>,
    pub push_controller: Arc<PushController>,
    pub notification_controller: Arc<NotificationController>,
    pub youtube_controller: Arc<YouTubeController>,
}

/// Build the application router with all routes configured
pub fn build_router(deps: HttpDependencies) -> Router {
    // Auth routes (login is public, profile needs an admin token)
    let auth_routes = Router::new()
        .route("/api/auth/login", post(AuthController::login))
        .with_state(deps.auth_controller.clone());

    let auth_protected_routes = Router::new()
        .route("/api/auth/me", get(AuthController::me))
        .with_state(deps.auth_controller.clone())
        .layer(middleware::from_fn_with_state(
            deps.auth_service.clone(),
            admin_middleware,
        ));

    // Articles: reads are public, mutations are admin only
    let article_routes = Router::new()
        .route("/api/articles", get(ArticleController::list))
        .route("/api/articles/featured", get(ArticleController::featured))
        .route("/api/articles/:id", get(ArticleController::get))
        .with_state(deps.article_controller.clone());

    let article_admin_routes = Router::new()
        .route("/api/articles", post(ArticleController::create))
        .route(
            "/api/articles/:id",
            put(ArticleController::update).delete(ArticleController::delete),
        )
        .with_state(deps.article_controller.clone())
        .layer(middleware::from_fn_with_state(
            deps.auth_service.clone(),
            admin_middleware,
        ));

    // Aggregated news
    let news_routes = Router::new()
        .route("/api/news/:region", get(NewsController::region))
        .route("/news-feed", get(NewsController::news_feed))
        .with_state(deps.news_controller.clone());

    let rss_routes = Router::new()
        .route("/rss/:file", get(RssController::feed))
        .with_state(deps.rss_controller.clone());

    let comment_routes = Router::new()
        .route(
            "/api/comments",
            get(CommentController::list).post(CommentController::create),
        )
        .route("/api/comments/:id/like", post(CommentController::like))
        .with_state(deps.comment_controller.clone());

    // Push subscriptions
    let push_routes = Router::new()
        .route("/api/push/subscribe", post(PushController::subscribe))
        .route("/api/push/unsubscribe", post(PushController::unsubscribe))
        .route("/api/push/stats", get(PushController::stats))
        .route(
            "/api/push/vapid-public-key",
            get(PushController::vapid_public_key),
        )
        .with_state(deps.push_controller.clone());

    let push_admin_routes = Router::new()
        .route("/api/push/send", post(PushController::send))
        .with_state(deps.push_controller.clone())
        .layer(middleware::from_fn_with_state(
            deps.auth_service.clone(),
            admin_middleware,
        ));

    let notification_routes = Router::new()
        .route(
            "/api/notifications/preferences",
            put(NotificationController::update_preferences),
        )
        .with_state(deps.notification_controller.clone());

    let notification_admin_routes = Router::new()
        .route("/api/notifications/send", post(NotificationController::send))
        .with_state(deps.notification_controller.clone())
        .layer(middleware::from_fn_with_state(
            deps.auth_service.clone(),
            admin_middleware,
        ));

    let youtube_routes = Router::new()
        .route(
            "/api/youtube/live-channels",
            get(YouTubeController::live_channels),
        )
        .route("/api/youtube/categories", get(YouTubeController::categories))
        .route("/api/youtube/trending", get(YouTubeController::trending))
        .with_state(deps.youtube_controller.clone());

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(deps.article_repo.clone())
        .merge(auth_routes)
        .merge(auth_protected_routes)
        .merge(article_routes)
        .merge(article_admin_routes)
        .merge(news_routes)
        .merge(rss_routes)
        .merge(comment_routes)
        .merge(push_routes)
        .merge(push_admin_routes)
        .merge(notification_routes)
        .merge(notification_admin_routes)
        .merge(youtube_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: &Config,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
