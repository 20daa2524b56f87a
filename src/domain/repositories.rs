use async_trait::async_trait;

use crate::domain::RepositoryError;
use crate::domain::screenshots::{Screenshot, UpdateScreenshot};

/// The collection behind the gallery. Implementations persist the whole
/// collection as one document on every mutation; a key-value store
/// adapter would slot in behind the same contract.
#[async_trait]
pub trait ScreenshotRepository: Send + Sync {
    /// The full collection, newest uploads first.
    async fn list(&self) -> Result<Vec<Screenshot>, RepositoryError>;
    async fn get(&self, id: &str) -> Result<Screenshot, RepositoryError>;
    /// Prepend a batch of new records, returning them as stored.
    async fn add_batch(&self, batch: Vec<Screenshot>) -> Result<Vec<Screenshot>, RepositoryError>;
    /// Replace subject/topic/year/tags on the record with this id.
    async fn update(
        &self,
        id: &str,
        changes: UpdateScreenshot,
    ) -> Result<Screenshot, RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
