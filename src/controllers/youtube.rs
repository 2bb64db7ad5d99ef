use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    controllers::extract::ApiQuery,
    domain::youtube::{LiveChannel, TrendingQuery, TrendingVideo, VideoCategory, YouTubeService},
    error::AppResult,
};

pub struct YouTubeController {
    youtube_service: Arc<YouTubeService>,
}

impl YouTubeController {
    pub fn new(youtube_service: Arc<YouTubeService>) -> Self {
        Self { youtube_service }
    }

    /// GET /api/youtube/live-channels
    pub async fn live_channels(
        State(controller): State<Arc<YouTubeController>>,
    ) -> Json<Vec<LiveChannel>> {
        Json(controller.youtube_service.live_channels().await)
    }

    /// GET /api/youtube/categories
    pub async fn categories(
        State(controller): State<Arc<YouTubeController>>,
    ) -> Json<Vec<VideoCategory>> {
        Json(controller.youtube_service.categories())
    }

    /// GET /api/youtube/trending?regionCode=NG&categoryId=25&maxResults=20
    pub async fn trending(
        State(controller): State<Arc<YouTubeController>>,
        ApiQuery(query): ApiQuery<TrendingQuery>,
    ) -> AppResult<Json<Vec<TrendingVideo>>> {
        let videos = controller.youtube_service.trending(&query).await?;
        Ok(Json(videos.as_ref().clone()))
    }
}
