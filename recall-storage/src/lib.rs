//! # recall-storage
//!
//! SQLite persistence for the document cache. Embeddings are stored as
//! little-endian f32 blobs, so a save/load round-trip preserves them
//! bit-for-bit and cached rankings stay reproducible across restarts.

pub mod store;

pub use store::SqliteDocumentStore;

use recall_core::errors::{RecallError, StorageError};

pub(crate) fn to_storage_err(message: impl Into<String>) -> RecallError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
