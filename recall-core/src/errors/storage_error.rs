/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("stored embedding is corrupt for document {id}: {details}")]
    CorruptEmbedding { id: String, details: String },
}
