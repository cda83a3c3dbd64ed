use crate::errors::RecallResult;
use crate::models::Passage;

/// External content provider: maps a query to candidate passages.
///
/// Opaque to the core. Implementations may hit a search API or serve
/// fixtures; the engine never retries — a failed or empty call simply
/// yields an empty candidate set downstream.
pub trait ISourceProvider: Send + Sync {
    /// Fetch candidate passages for a query.
    fn search(&self, query: &str) -> RecallResult<Vec<Passage>>;

    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;
}
