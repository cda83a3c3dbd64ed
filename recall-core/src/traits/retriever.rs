use crate::errors::RecallResult;
use crate::models::RankedResult;
use crate::traits::ISourceProvider;

/// Consumer-facing retrieval surface.
pub trait IRetriever: Send + Sync {
    /// Full retrieval: fetch candidates from `provider`, embed, rank, keep
    /// the top results, merge them into the cache, and return them.
    ///
    /// Provider failure and zero candidates both yield `Ok` with an empty
    /// result — "nothing relevant found" is a valid outcome, not an error.
    fn retrieve(&self, query: &str, provider: &dyn ISourceProvider) -> RecallResult<RankedResult>;

    /// Re-rank previously cached documents against an existing query
    /// embedding, bypassing any provider. Returns at most `top_k` entries.
    fn retrieve_from_cache(&self, query_embedding: &[f32], top_k: usize) -> RankedResult;
}
