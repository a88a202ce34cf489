//! Multi-tier cache for compiled artifacts.
//!
//! Three tiers are consulted in order: process memory, a shared cache that
//! outlives a single engine instance, and a durable on-disk store. A hit in
//! a lower tier back-fills the tiers above it; a miss everywhere runs the
//! caller's generator and stores the result in every tier.
//!
//! Tier failures never surface to callers. A tier that errors is logged and
//! treated as a miss.

mod entry;
mod key;
mod metrics;
pub mod tier;
mod tiered;

pub use entry::{now_millis, CacheEntry};
pub use key::{digest_hex, normalize_key};
pub use metrics::{CacheMetrics, MetricsSnapshot};
pub use tier::{CacheTier, DurableTier, MemoryTier, SharedTier};
pub use tiered::{ClearScope, TieredCache};
