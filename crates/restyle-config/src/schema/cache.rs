//! Multi-tier cache configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub memory_budget_bytes: usize,
    /// Fraction of the budget the memory tier is trimmed down to on eviction.
    pub eviction_ratio: f64,
    pub default_ttl_secs: u64,
    /// Keys longer than this are replaced by a digest.
    pub max_key_len: usize,
    pub shared_enabled: bool,
    pub durable_enabled: bool,
    /// Directory for the durable tier. Defaults to the platform data dir.
    pub durable_dir: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            memory_budget_bytes: 10 * 1024 * 1024,
            eviction_ratio: 0.8,
            default_ttl_secs: 3600,
            max_key_len: 172,
            shared_enabled: true,
            durable_enabled: true,
            durable_dir: None,
        }
    }
}

impl CacheConfig {
    /// Resolve the durable tier directory, falling back to `<data_dir>/restyle/cache`.
    pub fn resolved_durable_dir(&self) -> Option<PathBuf> {
        self.durable_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("restyle").join("cache")))
    }
}
