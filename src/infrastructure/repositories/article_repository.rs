use crate::domain::article::{Article, ArticleQuery, NewArticle};
use crate::error::AppResult;
use crate::infrastructure::db::{check_connection, DbPool};
use async_trait::async_trait;
use std::sync::Arc;

const MAX_LIST_LIMIT: i64 = 100;
const FEATURED_LIMIT: i64 = 5;

/// Persistence boundary for admin-authored articles
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Newest first. `category` matches exactly and `category_contains` as a
    /// substring, both ignoring case; uncategorized rows match neither.
    async fn list(&self, query: &ArticleQuery) -> AppResult<Vec<Article>>;

    /// Published featured articles, newest first
    async fn find_featured(&self) -> AppResult<Vec<Article>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Article>>;

    async fn create(&self, article: NewArticle) -> AppResult<Article>;

    /// Overwrite every column of an existing row. `None` when the row is gone.
    async fn update(&self, article: &Article) -> AppResult<Option<Article>>;

    /// `false` when nothing was deleted
    async fn delete(&self, id: i64) -> AppResult<bool>;

    async fn ping(&self) -> AppResult<()>;
}

pub struct PgArticleRepository {
    pool: Arc<DbPool>,
}

impl PgArticleRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn list(&self, query: &ArticleQuery) -> AppResult<Vec<Article>> {
        let pool = self.pool.as_ref();
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT * FROM articles
            WHERE ($1::TEXT IS NULL OR LOWER(category) = LOWER($1))
              AND ($2::TEXT IS NULL OR STRPOS(LOWER(category), LOWER($2)) > 0)
              AND ($3::TEXT IS NULL OR status = $3)
            ORDER BY date DESC, id DESC
            LIMIT $4
            "#,
        )
        .bind(query.category.as_deref())
        .bind(query.category_contains.as_deref())
        .bind(query.status.as_deref())
        .bind(clamp_limit(query.limit))
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    async fn find_featured(&self) -> AppResult<Vec<Article>> {
        let pool = self.pool.as_ref();
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT * FROM articles
            WHERE featured = TRUE AND status = 'published'
            ORDER BY date DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(FEATURED_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Article>> {
        let pool = self.pool.as_ref();
        let article = sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(article)
    }

    async fn create(&self, article: NewArticle) -> AppResult<Article> {
        let pool = self.pool.as_ref();
        let created = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (title, excerpt, content, category, image, read_time, author, source, date, featured, content_type, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&article.title)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.category)
        .bind(&article.image)
        .bind(&article.read_time)
        .bind(&article.author)
        .bind(&article.source)
        .bind(article.date)
        .bind(article.featured)
        .bind(&article.content_type)
        .bind(&article.status)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, article: &Article) -> AppResult<Option<Article>> {
        let pool = self.pool.as_ref();
        let updated = sqlx::query_as::<_, Article>(
            r#"
            UPDATE articles
            SET title = $1, excerpt = $2, content = $3, category = $4, image = $5,
                read_time = $6, author = $7, source = $8, date = $9, featured = $10,
                content_type = $11, status = $12
            WHERE id = $13
            RETURNING *
            "#,
        )
        .bind(&article.title)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.category)
        .bind(&article.image)
        .bind(&article.read_time)
        .bind(&article.author)
        .bind(&article.source)
        .bind(article.date)
        .bind(article.featured)
        .bind(&article.content_type)
        .bind(&article.status)
        .bind(article.id)
        .fetch_optional(pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        check_connection(self.pool.as_ref()).await?;
        Ok(())
    }
}
