use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    domain::article::{ArticleQuery, ArticleServiceApi, STATUS_PUBLISHED},
    domain::syndication::{generate_rss_feed, ChannelInfo, ALL_CATEGORIES, MAX_ITEMS},
    error::{AppError, AppResult},
};

const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

pub struct RssController {
    article_service: Arc<dyn ArticleServiceApi>,
    channel: ChannelInfo,
}

impl RssController {
    pub fn new(article_service: Arc<dyn ArticleServiceApi>, channel: ChannelInfo) -> Self {
        Self {
            article_service,
            channel,
        }
    }

    /// GET /rss/:category.xml
    pub async fn feed(
        State(controller): State<Arc<RssController>>,
        Path(file): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let category = file
            .strip_suffix(".xml")
            .ok_or_else(|| AppError::NotFound("Feed not found".to_string()))?;

        let category_contains = Some(category.trim())
            .filter(|wanted| !wanted.is_empty() && !wanted.eq_ignore_ascii_case(ALL_CATEGORIES))
            .map(str::to_string);

        let articles = controller
            .article_service
            .list(ArticleQuery {
                category: None,
                category_contains,
                status: Some(STATUS_PUBLISHED.to_string()),
                limit: Some(MAX_ITEMS as i64),
            })
            .await?;

        let xml = generate_rss_feed(category, &articles, &controller.channel);
        Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], xml))
    }
}
