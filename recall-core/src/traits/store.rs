use crate::errors::RecallResult;
use crate::models::Document;

/// Durable persistence for cached documents.
///
/// Round-tripping a document through `save` and `load` must preserve its
/// embedding bit-for-bit so that cached rankings stay reproducible.
pub trait IDocumentStore: Send + Sync {
    /// Persist documents, upserting by ID.
    fn save(&self, documents: &[Document]) -> RecallResult<()>;

    /// Load all persisted documents in insertion order.
    fn load(&self) -> RecallResult<Vec<Document>>;

    /// Remove all persisted documents.
    fn clear(&self) -> RecallResult<()>;
}
