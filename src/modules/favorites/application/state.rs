use super::store::FavoritesStore;
use crate::log_info;
use crate::modules::favorites::domain::{FavoriteItem, FavoritesCollection};
use tokio::sync::watch;

/// Single owner of the favorites every screen shows.
///
/// Screens read snapshots and send toggles here instead of each keeping its
/// own copy, so a toggle on one screen is visible on all of them. Subscribers
/// are woken after each change.
pub struct FavoritesState {
    store: FavoritesStore,
    sender: watch::Sender<FavoritesCollection>,
}

impl FavoritesState {
    /// Load the persisted collection once and take ownership of it
    pub fn load(store: FavoritesStore) -> Self {
        let initial = store.load();
        log_info!("Favorites: {} items restored", initial.len());
        let (sender, _) = watch::channel(initial);
        Self { store, sender }
    }

    pub fn snapshot(&self) -> FavoritesCollection {
        self.sender.borrow().clone()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        FavoritesStore::is_favorite(&self.sender.borrow(), id)
    }

    /// Toggle a title and persist. Returns whether it is now a favorite.
    pub fn toggle(&self, item: FavoriteItem) -> bool {
        let id = item.id;
        let mut now_favorite = false;
        self.sender.send_modify(|collection| {
            *collection = self.store.toggle(collection, item);
            now_favorite = collection.contains(id);
        });
        now_favorite
    }

    /// Re-read storage, e.g. after another process wrote to it
    pub fn reload(&self) {
        let fresh = self.store.load();
        self.sender.send_replace(fresh);
    }

    /// Receiver that sees every subsequent change
    pub fn subscribe(&self) -> watch::Receiver<FavoritesCollection> {
        self.sender.subscribe()
    }
}
