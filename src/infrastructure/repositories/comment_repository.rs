use super::json_store::JsonFileStore;
use crate::domain::comment::Comment;
use crate::error::AppResult;
use std::path::PathBuf;

/// Comments kept as a single JSON array on disk
pub struct CommentRepository {
    store: JsonFileStore<Vec<Comment>>,
}

impl CommentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub async fn list(&self, article_id: Option<&str>) -> AppResult<Vec<Comment>> {
        let comments = self.store.load().await?;
        Ok(match article_id {
            Some(article_id) => comments
                .into_iter()
                .filter(|c| c.article_id == article_id)
                .collect(),
            None => comments,
        })
    }

    pub async fn insert(&self, comment: Comment) -> AppResult<()> {
        self.store.update(|comments| comments.push(comment)).await
    }

    /// Add one like; `None` when the comment does not exist
    pub async fn like(&self, comment_id: &str) -> AppResult<Option<Comment>> {
        self.store
            .update(|comments| {
                comments
                    .iter_mut()
                    .find(|c| c.id == comment_id)
                    .map(|comment| {
                        comment.likes += 1;
                        comment.clone()
                    })
            })
            .await
    }
}
