use super::KeyValueStorage;
use crate::shared::errors::{AppError, AppResult};
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory storage with an optional byte quota, like a browser origin's
/// local storage. Used by tests and by hosts without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
    quota_bytes: Option<usize>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes that would push the total key+value size past `bytes` fail
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.key() != key)
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(AppError::StorageError(format!(
                    "Quota exceeded writing '{}' ({} of {} bytes)",
                    key, needed, quota
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
