use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    controllers::extract::ApiQuery,
    domain::news::{NewsService, RssArticle},
    error::AppResult,
};

const HOMEPAGE: &str = "homepage";

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub limit: Option<usize>,
}

pub struct NewsController {
    news_service: Arc<NewsService>,
}

impl NewsController {
    pub fn new(news_service: Arc<NewsService>) -> Self {
        Self { news_service }
    }

    /// GET /api/news/:region - One region, or every region for `homepage`
    pub async fn region(
        State(controller): State<Arc<NewsController>>,
        Path(region): Path<String>,
        ApiQuery(query): ApiQuery<NewsQuery>,
    ) -> AppResult<Json<Vec<RssArticle>>> {
        if region.eq_ignore_ascii_case(HOMEPAGE) {
            return Ok(Json(controller.news_service.homepage_news(query.limit).await));
        }

        let articles = controller
            .news_service
            .region_news(&region, query.limit)
            .await?;
        Ok(Json(articles))
    }

    /// GET /news-feed - Homepage mix
    pub async fn news_feed(
        State(controller): State<Arc<NewsController>>,
        ApiQuery(query): ApiQuery<NewsQuery>,
    ) -> Json<Vec<RssArticle>> {
        Json(controller.news_service.homepage_news(query.limit).await)
    }
}
