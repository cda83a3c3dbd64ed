//! Configuration structs, loadable from TOML.
//!
//! Every field has a default, so a missing file section (or a missing
//! file) yields a working config.

pub mod defaults;

mod cache_config;
mod embedding_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{ConfigError, RecallResult};

/// Top-level configuration for the Recall pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub cache: CacheConfig,
}

impl RecallConfig {
    /// Load from a TOML file.
    pub fn from_toml_file(path: &Path) -> RecallResult<Self> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&text)
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(text: &str) -> RecallResult<Self> {
        let config: Self = toml::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> RecallResult<()> {
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::Invalid {
                reason: "embedding.dimensions must be > 0".to_string(),
            }
            .into());
        }
        if self.retrieval.retrieve_top_k == 0 {
            return Err(ConfigError::Invalid {
                reason: "retrieval.retrieve_top_k must be > 0".to_string(),
            }
            .into());
        }
        if self.cache.capacity == Some(0) {
            return Err(ConfigError::Invalid {
                reason: "cache.capacity must be > 0 when set".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
