use super::KeyValueStorage;
use crate::shared::errors::{AppError, AppResult};
use crate::log_warn;
use crate::shared::utils::logger::LogContext;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key-value storage backed by one JSON object on disk.
///
/// Every `set` rewrites the whole file through a temp file and a rename, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AppResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                AppError::SerializationError(format!(
                    "Storage file {} is not a JSON object of strings: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to rewrite. A corrupt file is moved aside so writes keep working.
    fn read_for_update(&self) -> AppResult<BTreeMap<String, String>> {
        match self.read_all() {
            Err(AppError::SerializationError(reason)) => {
                let aside = self.path.with_extension("corrupt");
                fs::rename(&self.path, &aside)?;
                log_warn!(
                    "Storage: moved unreadable {} to {} ({})",
                    self.path.display(),
                    aside.display(),
                    reason
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn guard(&self) -> AppResult<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| AppError::StorageError("Storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.guard()?;
        let value = self.read_all()?.remove(key);
        LogContext::storage_operation("get", key, value.as_ref().map(String::len));
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.guard()?;
        let mut entries = self.read_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)?;
        LogContext::storage_operation("set", key, Some(value.len()));
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.guard()?;
        let mut entries = self.read_for_update()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        LogContext::storage_operation("remove", key, None);
        Ok(())
    }
}
