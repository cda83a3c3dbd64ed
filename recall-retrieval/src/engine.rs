//! RetrievalEngine: implements IRetriever, orchestrates the full pipeline.
//!
//! embed query → fetch candidates → embed candidates → score → rank →
//! keep top-K → merge into cache → return.

use recall_core::config::RecallConfig;
use recall_core::constants::MAX_PROVIDER_CANDIDATES;
use recall_core::errors::RecallResult;
use recall_core::models::{Document, RankedResult, ScoredDocument};
use recall_core::traits::{IEmbeddingProvider, IRetriever, ISourceProvider};
use recall_embeddings::EmbeddingEngine;
use tracing::{debug, info, warn};

use crate::cache::DocumentCache;
use crate::ranking;

/// The main retrieval engine. Owns the embedding engine and the document
/// cache; content providers are passed per call and stay opaque.
///
/// Retrieval calls for different queries are independent and may run
/// concurrently from separate threads — the cache serializes internally.
pub struct RetrievalEngine {
    embeddings: EmbeddingEngine,
    cache: DocumentCache,
    retrieve_top_k: usize,
    cache_top_k: usize,
}

impl RetrievalEngine {
    /// Create an engine with an empty cache.
    pub fn new(config: &RecallConfig) -> Self {
        Self {
            embeddings: EmbeddingEngine::new(&config.embedding),
            cache: DocumentCache::new(&config.cache),
            retrieve_top_k: config.retrieval.retrieve_top_k,
            cache_top_k: config.retrieval.cache_top_k,
        }
    }

    /// The embedding engine, for callers that need to embed a query once
    /// and re-use the vector across cached lookups.
    pub fn embeddings(&self) -> &EmbeddingEngine {
        &self.embeddings
    }

    /// The document cache — size queries, persistence snapshots, restore.
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Empty the document cache (conversation reset).
    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("document cache cleared");
    }

    /// Seed the cache with previously persisted documents.
    pub fn restore(&self, documents: Vec<Document>) {
        info!(count = documents.len(), "restoring documents into cache");
        self.cache.append(documents);
    }

    /// Re-rank the cache against a raw query string using the default
    /// cached-lookup result count.
    pub fn search_cache(&self, query: &str) -> RecallResult<RankedResult> {
        let query_embedding = self.embeddings.embed_text(query)?;
        Ok(self.retrieve_from_cache(&query_embedding, self.cache_top_k))
    }
}

impl IRetriever for RetrievalEngine {
    fn retrieve(&self, query: &str, provider: &dyn ISourceProvider) -> RecallResult<RankedResult> {
        // Step 1: embed the query.
        let query_embedding = self.embeddings.embed_text(query)?;

        // Step 2: candidates from the provider. Failure is recovered as
        // "nothing relevant found" — never an error from here out.
        let mut passages = match provider.search(query) {
            Ok(passages) => passages,
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    error = %e,
                    "content provider failed; returning empty result"
                );
                return Ok(Vec::new());
            }
        };

        if passages.is_empty() {
            debug!(provider = provider.name(), "no candidates for query");
            return Ok(Vec::new());
        }

        if passages.len() > MAX_PROVIDER_CANDIDATES {
            warn!(
                provider = provider.name(),
                received = passages.len(),
                kept = MAX_PROVIDER_CANDIDATES,
                "provider over candidate limit; truncating"
            );
            passages.truncate(MAX_PROVIDER_CANDIDATES);
        }

        debug!(
            provider = provider.name(),
            candidates = passages.len(),
            "scoring candidates"
        );

        // Step 3: embed and score each candidate against the query.
        let texts: Vec<String> = passages.iter().map(|p| p.text.clone()).collect();
        let embeddings = self.embeddings.embed_batch(&texts)?;

        let scored: Vec<ScoredDocument> = passages
            .into_iter()
            .zip(embeddings)
            .map(|(passage, embedding)| {
                let score = ranking::cosine(&query_embedding, &embedding);
                ScoredDocument {
                    document: Document::new(passage.text, embedding, passage.source),
                    score,
                }
            })
            .collect();

        // Step 4: rank, keep the top K, merge the keepers into the cache.
        let ranked = ranking::rank(scored, self.retrieve_top_k);
        self.cache
            .append(ranked.iter().map(|s| s.document.clone()).collect());

        info!(
            results = ranked.len(),
            cached = self.cache.len(),
            "retrieval complete"
        );

        Ok(ranked)
    }

    fn retrieve_from_cache(&self, query_embedding: &[f32], top_k: usize) -> RankedResult {
        self.cache.rescored(query_embedding, top_k)
    }
}
