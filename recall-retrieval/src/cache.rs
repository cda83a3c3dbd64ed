//! Document cache: previously retrieved passages with their embeddings,
//! available for re-ranking against later queries.
//!
//! The one shared mutable resource in the pipeline. A single mutex
//! serializes every operation, so a rescoring pass always sees a cache
//! that is not being extended mid-scan and two concurrent appends never
//! interleave. Entries are never evicted unless a capacity is configured;
//! `clear` is for conversation reset only.

use std::sync::{Mutex, MutexGuard, PoisonError};

use recall_core::config::CacheConfig;
use recall_core::models::{Document, RankedResult, ScoredDocument};
use tracing::debug;

use crate::ranking;

/// Append-ordered cache of retrieved documents.
pub struct DocumentCache {
    documents: Mutex<Vec<Document>>,
    capacity: Option<usize>,
}

impl DocumentCache {
    /// Create an empty cache.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            capacity: config.capacity,
        }
    }

    /// Lock the document list. The state is append-only, so it stays
    /// well-formed even if a previous holder panicked mid-append;
    /// poisoning is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Vec<Document>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add documents, preserving arrival order. No deduplication.
    ///
    /// With a configured capacity, the oldest entries are dropped first
    /// once the cache overflows.
    pub fn append(&self, documents: Vec<Document>) {
        if documents.is_empty() {
            return;
        }
        let mut cached = self.lock();
        cached.extend(documents);
        if let Some(capacity) = self.capacity {
            if cached.len() > capacity {
                let evict = cached.len() - capacity;
                cached.drain(..evict);
                debug!(evicted = evict, capacity, "document cache at capacity");
            }
        }
    }

    /// Re-score every cached document against `query_embedding` and return
    /// the `top_k` best as fresh ranking records.
    ///
    /// Returns exactly `min(top_k, len)` entries; ties keep cache order.
    pub fn rescored(&self, query_embedding: &[f32], top_k: usize) -> RankedResult {
        let scored: Vec<ScoredDocument> = self
            .lock()
            .iter()
            .map(|doc| ScoredDocument {
                score: ranking::cosine(query_embedding, &doc.embedding),
                document: doc.clone(),
            })
            .collect();
        ranking::rank(scored, top_k)
    }

    /// Empty the cache (conversation reset).
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of cached documents. Exposed so the surrounding application
    /// can apply its own growth policy.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the cached documents in arrival order, for persistence.
    pub fn snapshot(&self) -> Vec<Document> {
        self.lock().clone()
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
