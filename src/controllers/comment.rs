use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    controllers::extract::{ApiJson, ApiQuery},
    domain::comment::{Comment, CommentQuery, CommentService, CreateCommentRequest},
    error::AppResult,
};

pub struct CommentController {
    comment_service: Arc<CommentService>,
}

impl CommentController {
    pub fn new(comment_service: Arc<CommentService>) -> Self {
        Self { comment_service }
    }

    /// GET /api/comments?articleId=... - Newest first
    pub async fn list(
        State(controller): State<Arc<CommentController>>,
        ApiQuery(query): ApiQuery<CommentQuery>,
    ) -> AppResult<Json<Vec<Comment>>> {
        let comments = controller
            .comment_service
            .list(query.article_id.as_deref())
            .await?;
        Ok(Json(comments))
    }

    /// POST /api/comments
    pub async fn create(
        State(controller): State<Arc<CommentController>>,
        ApiJson(request): ApiJson<CreateCommentRequest>,
    ) -> AppResult<(StatusCode, Json<Comment>)> {
        let comment = controller.comment_service.create(request).await?;
        Ok((StatusCode::CREATED, Json(comment)))
    }

    /// POST /api/comments/:id/like
    pub async fn like(
        State(controller): State<Arc<CommentController>>,
        Path(comment_id): Path<String>,
    ) -> AppResult<Json<Comment>> {
        let comment = controller.comment_service.like(&comment_id).await?;
        Ok(Json(comment))
    }
}
