//! Durable tier: one JSON file per entry under a cache directory.
//!
//! The store has no native grouping, so prefix clearing reads every entry
//! and deletes the ones whose key matches.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use restyle_common::CacheError;
use tempfile::NamedTempFile;
use tracing::warn;

use super::CacheTier;
use crate::entry::{now_millis, CacheEntry};
use crate::key::digest_hex;

pub struct DurableTier {
    dir: PathBuf,
}

impl DurableTier {
    /// Open (and create if needed) a durable store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", digest_hex(key)))
    }

    fn read_entry(path: &Path) -> Result<Option<CacheEntry>, CacheError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| CacheError::Serialize(format!("{}: {e}", path.display())))
    }

    fn remove_file(path: &Path) -> Result<bool, CacheError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Every entry file in the store, with its parsed entry. Unreadable files
    /// are logged and removed.
    fn scan(&self) -> Result<Vec<(PathBuf, CacheEntry)>, CacheError> {
        let mut found = Vec::new();
        for dirent in fs::read_dir(&self.dir)? {
            let path = dirent?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_entry(&path) {
                Ok(Some(entry)) => found.push((path, entry)),
                Ok(None) => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding unreadable cache file");
                    Self::remove_file(&path)?;
                }
            }
        }
        Ok(found)
    }
}

impl CacheTier for DurableTier {
    fn name(&self) -> &'static str {
        "durable"
    }

    fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let path = self.path_for(key);
        let Some(entry) = Self::read_entry(&path)? else {
            return Ok(None);
        };
        if entry.key != key {
            return Ok(None);
        }
        if entry.is_expired() {
            Self::remove_file(&path)?;
            return Ok(None);
        }
        Ok(Some(entry))
    }

    fn set(&self, entry: CacheEntry) -> Result<(), CacheError> {
        let path = self.path_for(&entry.key);
        let bytes =
            serde_json::to_vec(&entry).map_err(|e| CacheError::Serialize(e.to_string()))?;
        // Each writer gets its own temp file; the rename is atomic, so
        // readers and concurrent writers never observe a partial entry.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Self::remove_file(&self.path_for(key))
    }

    fn clear_prefix(&self, prefix: &str) -> Result<usize, CacheError> {
        let mut removed = 0;
        for (path, entry) in self.scan()? {
            if entry.key.starts_with(prefix) && Self::remove_file(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn sweep_expired(&self) -> Result<usize, CacheError> {
        let now = now_millis();
        let mut removed = 0;
        for (path, entry) in self.scan()? {
            if entry.is_expired_at(now) && Self::remove_file(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
