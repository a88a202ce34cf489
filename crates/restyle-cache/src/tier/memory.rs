//! Process-memory tier with a byte budget and LRU eviction.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use restyle_common::CacheError;
use tracing::debug;

use super::CacheTier;
use crate::entry::{now_millis, CacheEntry};

struct Slot {
    entry: CacheEntry,
    size: usize,
    /// Monotonic access stamp; breaks ties between same-millisecond accesses.
    touched: u64,
}

#[derive(Default)]
struct State {
    slots: HashMap<String, Slot>,
    usage: usize,
    clock: u64,
}

impl State {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn remove(&mut self, key: &str) -> bool {
        match self.slots.remove(key) {
            Some(slot) => {
                self.usage -= slot.size;
                true
            }
            None => false,
        }
    }
}

/// Fastest tier. Usage is the serialized size of the held entries; when it
/// exceeds the budget the least recently accessed entries are evicted until
/// usage falls to `budget * eviction_ratio`.
pub struct MemoryTier {
    state: Mutex<State>,
    budget: usize,
    eviction_ratio: f64,
}

impl MemoryTier {
    pub fn new(budget: usize, eviction_ratio: f64) -> Self {
        Self {
            state: Mutex::new(State::default()),
            budget,
            eviction_ratio: eviction_ratio.clamp(0.0, 1.0),
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.lock().map(|s| s.slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, CacheError> {
        self.state
            .lock()
            .map_err(|_| CacheError::Backend("memory tier lock poisoned".into()))
    }

    /// Evict least recently used entries, never the one just written.
    fn evict(&self, state: &mut State, keep: &str) -> usize {
        let floor = (self.budget as f64 * self.eviction_ratio) as usize;
        let mut order: Vec<(u64, String)> = state
            .slots
            .iter()
            .filter(|(key, _)| key.as_str() != keep)
            .map(|(key, slot)| (slot.touched, key.clone()))
            .collect();
        order.sort_unstable();

        let mut evicted = 0;
        for (_, key) in order {
            if state.usage <= floor {
                break;
            }
            state.remove(&key);
            evicted += 1;
        }
        evicted
    }
}

impl CacheTier for MemoryTier {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let mut state = self.lock()?;
        let now = now_millis();
        let expired = match state.slots.get(key) {
            Some(slot) => slot.entry.is_expired_at(now),
            None => return Ok(None),
        };
        if expired {
            state.remove(key);
            return Ok(None);
        }

        let stamp = state.tick();
        Ok(state.slots.get_mut(key).map(|slot| {
            slot.touched = stamp;
            slot.entry.last_accessed = now;
            slot.entry.clone()
        }))
    }

    fn set(&self, entry: CacheEntry) -> Result<(), CacheError> {
        let size = entry.serialized_size();
        if size > self.budget {
            return Err(CacheError::TooLarge {
                size,
                limit: self.budget,
            });
        }

        let mut state = self.lock()?;
        let key = entry.key.clone();
        state.remove(&key);
        let touched = state.tick();
        state.usage += size;
        state.slots.insert(
            key.clone(),
            Slot {
                entry,
                size,
                touched,
            },
        );

        if state.usage > self.budget {
            let evicted = self.evict(&mut state, &key);
            debug!(evicted, usage = state.usage, budget = self.budget, "memory tier evicted");
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lock()?.remove(key))
    }

    fn clear_prefix(&self, prefix: &str) -> Result<usize, CacheError> {
        let mut state = self.lock()?;
        let keys: Vec<String> = state
            .slots
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();
        for key in &keys {
            state.remove(key);
        }
        Ok(keys.len())
    }

    fn sweep_expired(&self) -> Result<usize, CacheError> {
        let mut state = self.lock()?;
        let now = now_millis();
        let expired: Vec<String> = state
            .slots
            .iter()
            .filter(|(_, slot)| slot.entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            state.remove(key);
        }
        Ok(expired.len())
    }

    fn memory_usage(&self) -> Option<usize> {
        self.lock().ok().map(|s| s.usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn entry(key: &str, value: &str) -> CacheEntry {
        CacheEntry::new(key, value, Duration::from_secs(60))
    }

    #[test]
    fn set_then_get() {
        let tier = MemoryTier::new(1024 * 1024, 0.8);
        tier.set(entry("a", "alpha")).unwrap();
        let hit = tier.get("a").unwrap().unwrap();
        assert_eq!(hit.value, "alpha");
        assert!(tier.get("b").unwrap().is_none());
    }

    #[test]
    fn overwrite_replaces_and_accounts_once() {
        let tier = MemoryTier::new(1024 * 1024, 0.8);
        tier.set(entry("a", "one")).unwrap();
        let first = tier.memory_usage().unwrap();
        tier.set(entry("a", "two")).unwrap();
        assert_eq!(tier.len(), 1);
        assert_eq!(tier.memory_usage().unwrap(), first);
        assert_eq!(tier.get("a").unwrap().unwrap().value, "two");
    }

    #[test]
    fn usage_stays_within_budget() {
        let budget = 4096;
        let tier = MemoryTier::new(budget, 0.8);
        for i in 0..200 {
            tier.set(entry(&format!("key-{i}"), &"v".repeat(100))).unwrap();
            assert!(tier.memory_usage().unwrap() <= budget);
        }
        assert!(tier.len() < 200);
    }

    #[test]
    fn eviction_drops_least_recently_used() {
        let one = entry("k0", &"v".repeat(100)).serialized_size();
        // Room for four entries; eviction trims to three.
        let tier = MemoryTier::new(one * 4, 0.75);
        for i in 0..4 {
            tier.set(entry(&format!("k{i}"), &"v".repeat(100))).unwrap();
        }
        // Touch k0 so k1 becomes the oldest.
        assert!(tier.get("k0").unwrap().is_some());
        tier.set(entry("k4", &"v".repeat(100))).unwrap();

        assert!(tier.get("k0").unwrap().is_some());
        assert!(tier.get("k1").unwrap().is_none());
        assert!(tier.get("k4").unwrap().is_some());
    }

    #[test]
    fn oversized_entry_is_rejected() {
        let tier = MemoryTier::new(1024, 0.8);
        let err = tier.set(entry("big", &"x".repeat(4096))).unwrap_err();
        assert!(matches!(err, CacheError::TooLarge { .. }));
        assert!(tier.is_empty());
    }

    #[test]
    fn expired_entries_are_dropped_on_read_and_sweep() {
        let tier = MemoryTier::new(1024 * 1024, 0.8);
        tier.set(CacheEntry::new("a", "x", Duration::ZERO)).unwrap();
        tier.set(CacheEntry::new("b", "y", Duration::ZERO)).unwrap();
        tier.set(entry("c", "z")).unwrap();
        assert!(tier.get("a").unwrap().is_none());
        assert_eq!(tier.sweep_expired().unwrap(), 1);
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn clear_prefix_only_touches_matching_keys() {
        let tier = MemoryTier::new(1024 * 1024, 0.8);
        tier.set(entry("css:a", "1")).unwrap();
        tier.set(entry("css:b", "2")).unwrap();
        tier.set(entry("other:a", "3")).unwrap();
        assert_eq!(tier.clear_prefix("css:").unwrap(), 2);
        assert!(tier.get("other:a").unwrap().is_some());
        assert!(tier.delete("other:a").unwrap());
        assert_eq!(tier.memory_usage(), Some(0));
    }
}
