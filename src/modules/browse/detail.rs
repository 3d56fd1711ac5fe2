use super::cards::DetailView;
use crate::modules::catalog::domain::TitleDetail;
use crate::modules::catalog::CatalogService;
use crate::modules::favorites::{FavoriteItem, FavoritesState};
use crate::shared::application::{LoadState, RequestGuard};
use crate::log_debug;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Screen state of the single-title page
pub struct DetailScreen {
    catalog: Arc<CatalogService>,
    favorites: Arc<FavoritesState>,
    guard: RequestGuard,
    state: RwLock<LoadState<TitleDetail>>,
}

impl DetailScreen {
    pub fn new(catalog: Arc<CatalogService>, favorites: Arc<FavoritesState>) -> Self {
        Self {
            catalog,
            favorites,
            guard: RequestGuard::new(),
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Navigate to a title. Returns false if the user navigated again before
    /// this one settled.
    pub async fn open(&self, id: u32) -> bool {
        let ticket = self.guard.begin();
        *self.state.write().await = LoadState::Loading;

        let detail = self.catalog.get_detail(id).await;

        let mut state = self.state.write().await;
        if !self.guard.is_current(ticket) {
            log_debug!("Detail: dropping stale response for {}", id);
            return false;
        }
        *state = LoadState::from(detail);
        true
    }

    pub async fn state(&self) -> LoadState<TitleDetail> {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> LoadState<DetailView> {
        let favorites = self.favorites.snapshot();
        match &*self.state.read().await {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Empty => LoadState::Empty,
            LoadState::Loaded(detail) => LoadState::Loaded(DetailView::new(detail, &favorites)),
        }
    }

    /// Toggle the title on the page. `None` until a title has loaded.
    pub async fn toggle_favorite(&self) -> Option<bool> {
        let item = self.state.read().await.loaded().map(FavoriteItem::from)?;
        Some(self.favorites.toggle(item))
    }
}
