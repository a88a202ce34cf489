//! Cache counters and their serializable snapshot.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lock-free counters updated by the tiered cache.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    deletes: AtomicU64,
    generations: AtomicU64,
    generation_micros: AtomicU64,
    queries_saved: AtomicU64,
    peak_memory: AtomicU64,
}

impl CacheMetrics {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        self.queries_saved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_set(&self) {
        self.sets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation(&self, elapsed: Duration) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.generations.fetch_add(1, Ordering::Relaxed);
        self.generation_micros.fetch_add(micros, Ordering::Relaxed);
    }

    pub fn observe_memory(&self, usage: usize) {
        self.peak_memory.fetch_max(usage as u64, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        for counter in [
            &self.hits,
            &self.misses,
            &self.sets,
            &self.deletes,
            &self.generations,
            &self.generation_micros,
            &self.queries_saved,
            &self.peak_memory,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Point-in-time view. `memory_usage` and `tier_hits` come from the caller,
    /// which knows the tiers.
    pub fn snapshot(&self, memory_usage: usize, tier_hits: BTreeMap<String, u64>) -> MetricsSnapshot {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let generations = self.generations.load(Ordering::Relaxed);
        let generation_micros = self.generation_micros.load(Ordering::Relaxed);
        let lookups = hits + misses;

        MetricsSnapshot {
            hits,
            misses,
            sets: self.sets.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            hit_rate: if lookups == 0 {
                0.0
            } else {
                hits as f64 / lookups as f64
            },
            memory_usage,
            peak_memory_usage: self
                .peak_memory
                .load(Ordering::Relaxed)
                .max(memory_usage as u64) as usize,
            generations,
            avg_generation_ms: if generations == 0 {
                0.0
            } else {
                generation_micros as f64 / generations as f64 / 1000.0
            },
            queries_saved: self.queries_saved.load(Ordering::Relaxed),
            tier_hits,
        }
    }
}

/// Read-only diagnostics exposed to collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub deletes: u64,
    /// `hits / (hits + misses)`, 0 when nothing was looked up.
    pub hit_rate: f64,
    pub memory_usage: usize,
    pub peak_memory_usage: usize,
    pub generations: u64,
    pub avg_generation_ms: f64,
    /// Regenerations avoided by a cache hit.
    pub queries_saved: u64,
    pub tier_hits: BTreeMap<String, u64>,
}
