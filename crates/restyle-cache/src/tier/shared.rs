//! Shared tier: a cross-instance store with TTL-bound entries.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use restyle_common::CacheError;

use super::CacheTier;
use crate::entry::{now_millis, CacheEntry};

/// A cache that outlives any single engine instance. Clones share the same
/// backing map, so every compiler handed a clone sees the same entries.
#[derive(Clone, Default)]
pub struct SharedTier {
    inner: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl SharedTier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> CacheError {
    CacheError::Backend("shared tier lock poisoned".into())
}

impl CacheTier for SharedTier {
    fn name(&self) -> &'static str {
        "shared"
    }

    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let now = now_millis();
        {
            let map = self.inner.read().map_err(|_| poisoned())?;
            match map.get(key) {
                Some(entry) if !entry.is_expired_at(now) => return Ok(Some(entry.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }
        // Expired: drop it under the write lock.
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(key);
        Ok(None)
    }

    fn set(&self, entry: CacheEntry) -> Result<(), CacheError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(entry.key.clone(), entry);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(key).is_some())
    }

    fn clear_prefix(&self, prefix: &str) -> Result<usize, CacheError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let before = map.len();
        map.retain(|key, _| !key.starts_with(prefix));
        Ok(before - map.len())
    }

    fn sweep_expired(&self) -> Result<usize, CacheError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let now = now_millis();
        let before = map.len();
        map.retain(|_, entry| !entry.is_expired_at(now));
        Ok(before - map.len())
    }
}
