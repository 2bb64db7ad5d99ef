use crate::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// A JSON document on disk holding a whole collection.
///
/// Every mutation is a locked read-modify-write, and the new document is
/// written to a sibling temp file then renamed over the original, so readers
/// never observe a half written file. A missing file reads as the default
/// value; an unreadable one is an error.
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _document: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _document: PhantomData,
        }
    }

    /// Snapshot of the current document
    pub async fn load(&self) -> AppResult<T> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Apply `mutate` to the document and persist the result
    pub async fn update<R, F>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.read().await?;
        let result = mutate(&mut document);
        self.write(&document).await?;
        Ok(result)
    }

    async fn read(&self) -> AppResult<T> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(T::default()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to parse JSON store");
                AppError::Internal(format!("corrupt store {}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(AppError::Internal(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write(&self, document: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| AppError::Internal(format!("failed to serialize store: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::Internal(format!("failed to create data dir: {}", e)))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::Internal(format!("failed to persist {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "JSON store persisted");
        Ok(())
    }
}
