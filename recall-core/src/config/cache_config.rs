use serde::{Deserialize, Serialize};

/// Document cache configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Max documents held. `None` (the default) never evicts; with a
    /// capacity set, the oldest entries are dropped first on append.
    pub capacity: Option<usize>,
}
