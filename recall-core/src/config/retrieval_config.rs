use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Documents kept per provider-backed retrieval.
    pub retrieve_top_k: usize,
    /// Default result count for ad-hoc lookups over the cache.
    pub cache_top_k: usize,
    /// Request timeout for web-backed providers (seconds).
    pub provider_timeout_secs: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            retrieve_top_k: defaults::DEFAULT_RETRIEVE_TOP_K,
            cache_top_k: defaults::DEFAULT_CACHE_TOP_K,
            provider_timeout_secs: defaults::DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}
