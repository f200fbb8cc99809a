// ABOUTME: Error taxonomy for post collection operations.
// ABOUTME: Separates caller mistakes (validation, missing ids) from persistence failures.

use thiserror::Error;

/// Boxed error type that store backends report through.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A persistence failure. Fatal for the request that hit it; never retried.
#[derive(Debug, Error)]
#[error("storage failure: {0}")]
pub struct StorageError(#[source] pub BoxError);

impl StorageError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self(source.into())
    }
}

/// Errors returned by [`crate::PostService`] operations.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("{0}")]
    Validation(String),

    #[error("Post not found")]
    NotFound(u64),

    #[error("no post ids left to assign")]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PostError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
