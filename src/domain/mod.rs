pub mod errors;
pub mod filters;
pub mod images;
pub mod repositories;
pub mod screenshots;

// Re-exports
pub use errors::RepositoryError;
