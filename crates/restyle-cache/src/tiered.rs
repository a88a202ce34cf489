//! Tier orchestration: lookup order, back-fill, generator fallback.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use restyle_config::schema::CacheConfig;
use tracing::{debug, warn};

use crate::entry::CacheEntry;
use crate::key::normalize_key;
use crate::metrics::{CacheMetrics, MetricsSnapshot};
use crate::tier::{CacheTier, DurableTier, MemoryTier, SharedTier};

/// What [`TieredCache::clear`] removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearScope {
    /// Every entry in every tier.
    All,
    /// Every key stored under a group.
    Group(String),
    /// Every normalized key starting with the pattern. A trailing `*` is ignored.
    Pattern(String),
}

impl ClearScope {
    fn prefix(&self) -> String {
        match self {
            ClearScope::All => String::new(),
            ClearScope::Group(group) => format!("{group}:"),
            ClearScope::Pattern(pattern) => pattern.trim_end_matches('*').to_string(),
        }
    }
}

/// Ordered stack of tiers, fastest first.
pub struct TieredCache {
    tiers: Vec<Box<dyn CacheTier>>,
    tier_hits: Vec<AtomicU64>,
    metrics: CacheMetrics,
    default_ttl: Duration,
    max_key_len: usize,
}

impl TieredCache {
    pub fn new(tiers: Vec<Box<dyn CacheTier>>, default_ttl: Duration, max_key_len: usize) -> Self {
        let tier_hits = tiers.iter().map(|_| AtomicU64::new(0)).collect();
        Self {
            tiers,
            tier_hits,
            metrics: CacheMetrics::default(),
            default_ttl,
            max_key_len,
        }
    }

    /// A cache with no tiers: every `remember` runs its generator.
    pub fn disabled() -> Self {
        Self::new(Vec::new(), Duration::ZERO, usize::MAX)
    }

    /// Build the standard memory, shared, durable stack from config.
    ///
    /// `shared` lets several caches in one host share a shared tier; when
    /// `None` a private one is created. A durable directory that cannot be
    /// opened is logged and the tier is left out.
    pub fn from_config(config: &CacheConfig, shared: Option<SharedTier>) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        let mut tiers: Vec<Box<dyn CacheTier>> = vec![Box::new(MemoryTier::new(
            config.memory_budget_bytes,
            config.eviction_ratio,
        ))];

        if config.shared_enabled {
            tiers.push(Box::new(shared.unwrap_or_default()));
        }

        if config.durable_enabled {
            match config.resolved_durable_dir() {
                Some(dir) => match DurableTier::open(&dir) {
                    Ok(tier) => tiers.push(Box::new(tier)),
                    Err(e) => {
                        warn!(dir = %dir.display(), error = %e, "durable cache tier unavailable");
                    }
                },
                None => warn!("no data directory for the durable cache tier"),
            }
        }

        Self::new(
            tiers,
            Duration::from_secs(config.default_ttl_secs),
            config.max_key_len,
        )
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    pub fn is_disabled(&self) -> bool {
        self.tiers.is_empty()
    }

    /// The storage key used for `(group, key)`.
    pub fn storage_key(&self, group: &str, key: &str) -> String {
        normalize_key(group, key, self.max_key_len)
    }

    fn ttl_or_default(&self, ttl: Option<Duration>) -> Duration {
        match ttl {
            Some(ttl) if !ttl.is_zero() => ttl,
            _ => self.default_ttl,
        }
    }

    /// Walk the tiers in order. On a hit below the top tier, copy the entry
    /// into every tier above it with its remaining lifetime.
    fn lookup(&self, storage_key: &str) -> Option<CacheEntry> {
        for (index, tier) in self.tiers.iter().enumerate() {
            let entry = match tier.get(storage_key) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(e) => {
                    warn!(tier = tier.name(), key = storage_key, error = %e, "cache tier read failed");
                    continue;
                }
            };

            self.tier_hits[index].fetch_add(1, Ordering::Relaxed);
            for upper in &self.tiers[..index] {
                if let Err(e) = upper.set(entry.clone()) {
                    warn!(tier = upper.name(), key = storage_key, error = %e, "cache back-fill failed");
                }
            }
            debug!(tier = tier.name(), key = storage_key, "cache hit");
            return Some(entry);
        }
        None
    }

    fn store(&self, entry: CacheEntry) -> bool {
        let mut stored = false;
        for tier in &self.tiers {
            match tier.set(entry.clone()) {
                Ok(()) => stored = true,
                Err(e) => {
                    warn!(tier = tier.name(), key = %entry.key, error = %e, "cache tier write failed");
                }
            }
        }
        self.observe_memory();
        stored
    }

    fn observe_memory(&self) {
        self.metrics.observe_memory(self.memory_usage());
    }

    fn memory_usage(&self) -> usize {
        self.tiers.iter().filter_map(|t| t.memory_usage()).sum()
    }

    /// Return the cached value for `(group, key)`, or run `generator`, store
    /// its output in every tier and return it.
    pub fn remember<F>(&self, group: &str, key: &str, ttl: Option<Duration>, generator: F) -> String
    where
        F: FnOnce() -> String,
    {
        self.remember_where(group, key, ttl, || (generator(), ()), |_| true)
            .0
    }

    /// [`remember`](Self::remember) for generators that return a side value
    /// alongside the text. Output is stored only when `keep` accepts it.
    /// The side value is `None` on a hit.
    pub fn remember_where<F, T>(
        &self,
        group: &str,
        key: &str,
        ttl: Option<Duration>,
        generator: F,
        keep: impl FnOnce(&str) -> bool,
    ) -> (String, Option<T>)
    where
        F: FnOnce() -> (String, T),
    {
        let storage_key = self.storage_key(group, key);
        if let Some(entry) = self.lookup(&storage_key) {
            self.metrics.record_hit();
            return (entry.value, None);
        }

        self.metrics.record_miss();
        let started = Instant::now();
        let (value, side) = generator();
        self.metrics.record_generation(started.elapsed());

        if keep(&value) {
            let entry = CacheEntry::new(storage_key, value.clone(), self.ttl_or_default(ttl));
            if self.store(entry) {
                self.metrics.record_set();
            }
        }
        (value, Some(side))
    }

    /// Direct read, no generator.
    pub fn get(&self, group: &str, key: &str) -> Option<String> {
        let storage_key = self.storage_key(group, key);
        match self.lookup(&storage_key) {
            Some(entry) => {
                self.metrics.record_hit();
                Some(entry.value)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Direct write into every tier. Returns whether any tier accepted it.
    pub fn set(&self, group: &str, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let storage_key = self.storage_key(group, key);
        let entry = CacheEntry::new(storage_key, value, self.ttl_or_default(ttl));
        let stored = self.store(entry);
        if stored {
            self.metrics.record_set();
        }
        stored
    }

    /// Remove a key from every tier. Returns whether any tier held it.
    pub fn delete(&self, group: &str, key: &str) -> bool {
        let storage_key = self.storage_key(group, key);
        let mut existed = false;
        for tier in &self.tiers {
            match tier.delete(&storage_key) {
                Ok(found) => existed |= found,
                Err(e) => {
                    warn!(tier = tier.name(), key = %storage_key, error = %e, "cache tier delete failed");
                }
            }
        }
        if existed {
            self.metrics.record_delete();
        }
        existed
    }

    /// Remove every entry in `scope` from every tier, one tier at a time.
    pub fn clear(&self, scope: &ClearScope) -> usize {
        let prefix = scope.prefix();
        let mut removed = 0;
        for tier in &self.tiers {
            match tier.clear_prefix(&prefix) {
                Ok(n) => removed += n,
                Err(e) => {
                    warn!(tier = tier.name(), prefix = %prefix, error = %e, "cache tier clear failed");
                }
            }
        }
        debug!(?scope, removed, "cache cleared");
        removed
    }

    /// Drop expired entries in every tier. Intended to run on a schedule.
    pub fn sweep(&self) -> usize {
        let mut removed = 0;
        for tier in &self.tiers {
            match tier.sweep_expired() {
                Ok(n) => removed += n,
                Err(e) => warn!(tier = tier.name(), error = %e, "cache sweep failed"),
            }
        }
        removed
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        let tier_hits = self
            .tiers
            .iter()
            .zip(&self.tier_hits)
            .map(|(tier, hits)| (tier.name().to_string(), hits.load(Ordering::Relaxed)))
            .collect::<BTreeMap<_, _>>();
        self.metrics.snapshot(self.memory_usage(), tier_hits)
    }

    pub fn reset_metrics(&self) {
        self.metrics.reset();
        for hits in &self.tier_hits {
            hits.store(0, Ordering::Relaxed);
        }
    }
}
