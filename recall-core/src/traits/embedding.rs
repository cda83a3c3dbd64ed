use crate::errors::RecallResult;

/// Embedding generation provider.
///
/// Implementations must be deterministic across calls AND across process
/// restarts: the same text always yields the same vector. Cached rankings
/// are only reproducible under that guarantee, so providers must not
/// depend on per-run state (`std`'s `DefaultHasher` is seeded per process
/// and is therefore not usable here).
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text. Total over all inputs: empty text yields the
    /// all-zero vector, never an error.
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> RecallResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
