//! Cache entry shared by every tier.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A cached value with its lifetime bookkeeping. Timestamps are epoch millis
/// so entries survive a round-trip through the durable tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub value: String,
    pub created_at: i64,
    pub expires_at: i64,
    pub last_accessed: i64,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, ttl: Duration) -> Self {
        let now = now_millis();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self {
            key: key.into(),
            value: value.into(),
            created_at: now,
            expires_at: now.saturating_add(ttl_ms),
            last_accessed: now,
        }
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_millis())
    }

    /// Lifetime left before expiry, zero when already expired.
    pub fn remaining_ttl(&self) -> Duration {
        let left = self.expires_at.saturating_sub(now_millis());
        Duration::from_millis(u64::try_from(left).unwrap_or(0))
    }

    /// Size of the entry as stored: its serialized JSON length.
    pub fn serialized_size(&self) -> usize {
        serde_json::to_vec(self)
            .map(|bytes| bytes.len())
            .unwrap_or(self.key.len() + self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_expires_after_ttl() {
        let entry = CacheEntry::new("k", "v", Duration::from_secs(60));
        assert_eq!(entry.expires_at - entry.created_at, 60_000);
        assert!(!entry.is_expired());
        assert!(entry.is_expired_at(entry.expires_at));
    }

    #[test]
    fn zero_ttl_is_expired_immediately() {
        let entry = CacheEntry::new("k", "v", Duration::ZERO);
        assert!(entry.is_expired());
        assert_eq!(entry.remaining_ttl(), Duration::ZERO);
    }

    #[test]
    fn serialized_size_grows_with_value() {
        let small = CacheEntry::new("k", "v", Duration::from_secs(1));
        let large = CacheEntry::new("k", "v".repeat(100), Duration::from_secs(1));
        assert!(large.serialized_size() > small.serialized_size() + 90);
    }
}
