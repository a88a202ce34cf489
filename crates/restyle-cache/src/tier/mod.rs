//! Cache tier backends.

mod durable;
mod memory;
mod shared;

pub use durable::DurableTier;
pub use memory::MemoryTier;
pub use shared::SharedTier;

use restyle_common::CacheError;

use crate::entry::CacheEntry;

/// One storage tier. The tiered cache only talks to tiers through this trait.
pub trait CacheTier: Send + Sync {
    /// Short name used in logs and per-tier metrics.
    fn name(&self) -> &'static str;

    /// Fetch a live entry. Expired entries are dropped and reported as absent.
    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;

    /// Store an entry, replacing any entry under the same key.
    fn set(&self, entry: CacheEntry) -> Result<(), CacheError>;

    /// Remove one key. Returns whether it existed.
    fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Remove every key starting with `prefix`. Returns the number removed.
    fn clear_prefix(&self, prefix: &str) -> Result<usize, CacheError>;

    /// Remove entries whose TTL has elapsed. Returns the number removed.
    fn sweep_expired(&self) -> Result<usize, CacheError>;

    /// Bytes currently held, for tiers that track a budget.
    fn memory_usage(&self) -> Option<usize> {
        None
    }
}
