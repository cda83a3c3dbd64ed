//! Error taxonomy for the Recall pipeline.
//!
//! One enum per subsystem plus the top-level [`RecallError`] every public
//! fallible API returns. Recovered conditions (provider failure, scorer
//! dimension mismatch) are logged at the recovery site and never reach
//! callers as errors.

mod config_error;
mod embedding_error;
mod retrieval_error;
mod storage_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type RecallResult<T> = Result<T, RecallError>;

/// Top-level error wrapping every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
