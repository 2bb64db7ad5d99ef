use async_trait::async_trait;
use chrono::Utc;
use newsdesk_backend::domain::article::{Article, ArticleQuery, NewArticle};
use newsdesk_backend::domain::notification::{NotificationError, NotificationSender, TopicMessage};
use newsdesk_backend::domain::push::{PushDeliveryError, PushGateway, PushSubscription};
use newsdesk_backend::domain::user::User;
use newsdesk_backend::error::{AppError, AppResult};
use newsdesk_backend::infrastructure::repositories::article_repository::clamp_limit;
use newsdesk_backend::infrastructure::repositories::{ArticleRepository, UserRepository};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Article store with the same filtering and ordering as the Postgres one
#[derive(Default)]
pub struct MemoryArticleRepository {
    rows: Mutex<Vec<Article>>,
    pub offline: AtomicBool,
}

impl MemoryArticleRepository {
    fn sorted(&self) -> Vec<Article> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn list(&self, query: &ArticleQuery) -> AppResult<Vec<Article>> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|a| match (&query.category, &a.category) {
                (Some(wanted), Some(category)) => wanted.eq_ignore_ascii_case(category),
                (Some(_), None) => false,
                (None, _) => true,
            })
            .filter(|a| match (&query.category_contains, &a.category) {
                (Some(wanted), Some(category)) => {
                    category.to_lowercase().contains(&wanted.to_lowercase())
                }
                (Some(_), None) => false,
                (None, _) => true,
            })
            .filter(|a| query.status.as_ref().map_or(true, |s| &a.status == s))
            .take(clamp_limit(query.limit) as usize)
            .collect())
    }

    async fn find_featured(&self) -> AppResult<Vec<Article>> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|a| a.featured && a.is_published())
            .take(5)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, article: NewArticle) -> AppResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        let created = Article {
            id: rows.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            title: article.title,
            excerpt: article.excerpt,
            content: article.content,
            category: article.category,
            image: article.image,
            read_time: Some(article.read_time),
            author: Some(article.author),
            source: Some(article.source),
            date: article.date,
            featured: article.featured,
            content_type: article.content_type,
            status: article.status,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, article: &Article) -> AppResult<Option<Article>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|a| a.id == article.id).map(|row| {
            *row = article.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() != before)
    }

    async fn ping(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, user_id: i32) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, username: &str, password_hash: &str, is_admin: bool) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i32 + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            is_admin,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

pub const PUSH_PUBLIC_KEY: &str = "BTestPublicKey";

/// Accepts every delivery except endpoints containing `gone` or `broken`
#[derive(Default)]
pub struct RecordingPushGateway {
    pub delivered: Mutex<Vec<(String, serde_json::Value)>>,
}

#[async_trait]
impl PushGateway for RecordingPushGateway {
    fn public_key(&self) -> &str {
        PUSH_PUBLIC_KEY
    }

    async fn deliver(
        &self,
        subscription: &PushSubscription,
        payload: &[u8],
    ) -> Result<(), PushDeliveryError> {
        if subscription.endpoint.contains("gone") {
            return Err(PushDeliveryError::Gone);
        }
        if subscription.endpoint.contains("broken") {
            return Err(PushDeliveryError::Rejected("500".to_string()));
        }
        let payload = serde_json::from_slice(payload).unwrap_or(serde_json::Value::Null);
        self.delivered
            .lock()
            .unwrap()
            .push((subscription.endpoint.clone(), payload));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<TopicMessage>>,
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, message: &TopicMessage) -> Result<String, NotificationError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(format!("projects/test/messages/{}", sent.len()))
    }
}
