//! Default values shared by the config structs.

/// Embedding dimension count. Small enough for on-device scoring.
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Max entries in the embedding memo-cache.
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 100;

/// Documents kept (and cached) per provider-backed retrieval.
pub const DEFAULT_RETRIEVE_TOP_K: usize = 3;

/// Documents returned by an ad-hoc cached lookup.
pub const DEFAULT_CACHE_TOP_K: usize = 5;

/// Request timeout for web-backed content providers (seconds).
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
