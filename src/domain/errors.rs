use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("screenshot not found: {id}")]
    NotFound { id: String },
}

impl RepositoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        RepositoryError::NotFound { id: id.into() }
    }
}
