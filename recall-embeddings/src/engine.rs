//! EmbeddingEngine — the entry point for recall-embeddings.
//!
//! Wraps the hashed provider with the memo-cache and a strict dimension
//! check. Implements `IEmbeddingProvider` so it drops in anywhere a bare
//! provider is expected.

use recall_core::config::EmbeddingConfig;
use recall_core::errors::{EmbeddingError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::provider::HashedProvider;

/// The main embedding engine: cache lookup → provider → validation.
pub struct EmbeddingEngine {
    provider: HashedProvider,
    cache: EmbeddingCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let provider = HashedProvider::new(config.dimensions);
        let cache = EmbeddingCache::new(config.cache_size);

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            cache_size = config.cache_size,
            "EmbeddingEngine initialized"
        );

        Self {
            provider,
            cache,
            dimensions: config.dimensions,
        }
    }

    /// Embed text with memoization, keyed by its blake3 content hash.
    pub fn embed_text(&self, text: &str) -> RecallResult<Vec<f32>> {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();

        if let Some(vec) = self.cache.get(&hash) {
            debug!(%hash, "embedding cache hit");
            return Ok(vec);
        }

        let embedding = self.provider.embed(text)?;
        validate_dimensions(&embedding, self.dimensions)?;

        self.cache.insert(hash, embedding.clone());
        Ok(embedding)
    }

    /// The configured dimension count.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Reject vectors whose length does not match the configured dimension.
///
/// By construction the provider always produces the right length; this is
/// the strict check at the data-model boundary.
fn validate_dimensions(embedding: &[f32], expected: usize) -> RecallResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        self.embed_text(text)
    }

    fn embed_batch(&self, texts: &[String]) -> RecallResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed_text(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "recall-embedding-engine"
    }
}
