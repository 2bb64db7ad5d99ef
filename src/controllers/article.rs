use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    controllers::extract::{ApiJson, ApiQuery},
    domain::article::{
        Article, ArticleQuery, ArticleServiceApi, CreateArticleRequest, UpdateArticleRequest,
    },
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct ArticleController {
    article_service: Arc<dyn ArticleServiceApi>,
}

impl ArticleController {
    pub fn new(article_service: Arc<dyn ArticleServiceApi>) -> Self {
        Self { article_service }
    }

    /// GET /api/articles - List articles, newest first
    pub async fn list(
        State(controller): State<Arc<ArticleController>>,
        ApiQuery(query): ApiQuery<ArticleQuery>,
    ) -> AppResult<Json<Vec<Article>>> {
        let articles = controller.article_service.list(query).await?;
        Ok(Json(articles))
    }

    /// GET /api/articles/featured
    pub async fn featured(
        State(controller): State<Arc<ArticleController>>,
    ) -> AppResult<Json<Vec<Article>>> {
        let articles = controller.article_service.featured().await?;
        Ok(Json(articles))
    }

    /// GET /api/articles/:id
    pub async fn get(
        State(controller): State<Arc<ArticleController>>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<Article>> {
        let article = controller.article_service.get(id).await?;
        Ok(Json(article))
    }

    /// POST /api/articles - Create an article (admin)
    pub async fn create(
        State(controller): State<Arc<ArticleController>>,
        Extension(auth_user): Extension<AuthUser>,
        ApiJson(request): ApiJson<CreateArticleRequest>,
    ) -> AppResult<(StatusCode, Json<Article>)> {
        let article = controller
            .article_service
            .create(request, Some(&auth_user.username))
            .await?;
        Ok((StatusCode::CREATED, Json(article)))
    }

    /// PUT /api/articles/:id - Partial update (admin)
    pub async fn update(
        State(controller): State<Arc<ArticleController>>,
        Path(id): Path<i64>,
        ApiJson(request): ApiJson<UpdateArticleRequest>,
    ) -> AppResult<Json<Article>> {
        let article = controller.article_service.update(id, request).await?;
        Ok(Json(article))
    }

    /// DELETE /api/articles/:id (admin)
    pub async fn delete(
        State(controller): State<Arc<ArticleController>>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<Value>> {
        controller.article_service.delete(id).await?;
        Ok(Json(json!({ "message": "Article deleted" })))
    }
}
