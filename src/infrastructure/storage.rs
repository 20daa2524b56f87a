use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::RepositoryError;
use crate::domain::repositories::ScreenshotRepository;
use crate::domain::screenshots::{self, Screenshot, UpdateScreenshot};

/// Read and parse the persisted collection. A missing file is an empty
/// gallery; anything unreadable or not a well-formed array is logged and
/// masked with the empty collection. Never fails.
pub async fn load_collection(path: &Path) -> Vec<Screenshot> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read screenshot store");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Screenshot>>(&raw) {
        Ok(collection) => collection,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "screenshot store is not a well-formed collection");
            Vec::new()
        }
    }
}

/// Serialize and rewrite the full collection. Write failures are logged
/// and otherwise ignored; there is no retry or rollback.
pub async fn save_collection(path: &Path, collection: &[Screenshot]) {
    let json = match serde_json::to_string(collection) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "failed to serialize screenshot collection");
            return;
        }
    };

    if let Err(err) = tokio::fs::write(path, json).await {
        warn!(path = %path.display(), error = %err, "failed to write screenshot store");
    }
}

/// Identity for a non-empty collection; otherwise returns and persists
/// the six sample records.
pub async fn seed_if_empty(path: &Path, collection: Vec<Screenshot>) -> Vec<Screenshot> {
    if !collection.is_empty() {
        return collection;
    }

    let samples = screenshots::sample_screenshots(screenshots::now_millis());
    info!(count = samples.len(), "seeding empty gallery with sample screenshots");
    save_collection(path, &samples).await;
    samples
}

/// The localStorage analog: one JSON document on disk holding the whole
/// collection, mirrored in memory behind a lock. Every mutation rewrites
/// the document in full.
pub struct JsonFileStore {
    path: PathBuf,
    collection: RwLock<Vec<Screenshot>>,
}

impl JsonFileStore {
    /// Load (or seed) the collection and stand the store up.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let loaded = load_collection(&path).await;
        let collection = seed_if_empty(&path, loaded).await;

        info!(path = %path.display(), count = collection.len(), "screenshot store ready");

        Self {
            path,
            collection: RwLock::new(collection),
        }
    }
}

#[async_trait]
impl ScreenshotRepository for JsonFileStore {
    async fn list(&self) -> Result<Vec<Screenshot>, RepositoryError> {
        Ok(self.collection.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Screenshot, RepositoryError> {
        self.collection
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn add_batch(&self, batch: Vec<Screenshot>) -> Result<Vec<Screenshot>, RepositoryError> {
        let mut collection = self.collection.write().await;
        screenshots::prepend_batch(&mut collection, batch.clone());
        save_collection(&self.path, &collection).await;
        Ok(batch)
    }

    async fn update(
        &self,
        id: &str,
        changes: UpdateScreenshot,
    ) -> Result<Screenshot, RepositoryError> {
        let mut collection = self.collection.write().await;
        let updated = screenshots::update_by_id(&mut collection, id, changes)
            .ok_or_else(|| RepositoryError::not_found(id))?;
        save_collection(&self.path, &collection).await;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut collection = self.collection.write().await;
        if !screenshots::remove_by_id(&mut collection, id) {
            return Err(RepositoryError::not_found(id));
        }
        save_collection(&self.path, &collection).await;
        Ok(())
    }
}
