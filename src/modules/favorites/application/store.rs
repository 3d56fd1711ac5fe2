use crate::modules::favorites::domain::{FavoriteItem, FavoritesCollection, Toggle};
use crate::shared::storage::KeyValueStorage;
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_error, log_warn};
use std::sync::Arc;

/// Storage key holding the serialized favorites array
pub const FAVORITES_KEY: &str = "favorites";

/// Favorites persistence over the key-value port.
///
/// Reads fail soft (anything unreadable is an empty collection) and writes
/// are best effort (failures are logged, never returned).
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, FAVORITES_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted collection; missing or malformed data reads as empty
    pub fn load(&self) -> FavoritesCollection {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log_debug!("Favorites: nothing stored under '{}'", self.key);
                return FavoritesCollection::new();
            }
            Err(e) => {
                LogContext::degraded("Reading favorites", &e);
                return FavoritesCollection::new();
            }
        };

        match serde_json::from_str::<FavoritesCollection>(&raw) {
            Ok(collection) => {
                log_debug!("Favorites: loaded {} items", collection.len());
                collection
            }
            Err(e) => {
                log_warn!(
                    "Favorites: stored value under '{}' is malformed, starting empty: {}",
                    self.key,
                    e
                );
                FavoritesCollection::new()
            }
        }
    }

    pub fn is_favorite(collection: &FavoritesCollection, id: u32) -> bool {
        collection.contains(id)
    }

    /// Toggle membership and flush the whole new collection
    pub fn toggle(&self, collection: &FavoritesCollection, item: FavoriteItem) -> FavoritesCollection {
        let id = item.id;
        let (next, outcome) = collection.toggled(item);
        match outcome {
            Toggle::Added => log_debug!("Favorites: added {}", id),
            Toggle::Removed => log_debug!("Favorites: removed {}", id),
        }
        self.save(&next);
        next
    }

    /// Overwrite the stored collection. Failures are logged and swallowed; the
    /// caller's in-memory collection stays authoritative.
    pub fn save(&self, collection: &FavoritesCollection) {
        let json = match serde_json::to_string(collection) {
            Ok(json) => json,
            Err(e) => {
                log_error!("Favorites: failed to serialize collection: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &json) {
            log_error!(
                "Favorites: failed to persist {} items under '{}': {}",
                collection.len(),
                self.key,
                e
            );
        }
    }
}
