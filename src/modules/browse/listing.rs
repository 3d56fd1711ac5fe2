use super::cards::TitleCard;
use crate::modules::catalog::domain::{Category, Genre, TitleSummary};
use crate::modules::catalog::CatalogService;
use crate::modules::favorites::{FavoriteItem, FavoritesState};
use crate::shared::application::{LoadState, RequestGuard};
use crate::{log_debug, log_warn};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// What the listing is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ListingSource {
    Category(Category),
    Search(String),
    Genre(u32),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingState {
    pub source: Option<ListingSource>,
    pub titles: LoadState<Vec<TitleSummary>>,
}

/// Screen state behind the category rows, the search results and the genre
/// filter. One request generation covers all three, so whichever the user
/// asked for last wins.
pub struct ListingScreen {
    catalog: Arc<CatalogService>,
    favorites: Arc<FavoritesState>,
    guard: RequestGuard,
    state: RwLock<ListingState>,
    genres: RwLock<LoadState<Vec<Genre>>>,
}

impl ListingScreen {
    pub fn new(catalog: Arc<CatalogService>, favorites: Arc<FavoritesState>) -> Self {
        Self {
            catalog,
            favorites,
            guard: RequestGuard::new(),
            state: RwLock::new(ListingState::default()),
            genres: RwLock::new(LoadState::Idle),
        }
    }

    /// Returns false when a newer request superseded this one
    pub async fn show_category(&self, category: Category) -> bool {
        self.load(
            ListingSource::Category(category),
            self.catalog.list_by_category(category),
        )
        .await
    }

    pub async fn search(&self, keyword: &str) -> bool {
        self.load(
            ListingSource::Search(keyword.trim().to_string()),
            self.catalog.search(keyword),
        )
        .await
    }

    pub async fn filter_by_genre(&self, genre_id: u32) -> bool {
        self.load(
            ListingSource::Genre(genre_id),
            self.catalog.list_by_genre(genre_id),
        )
        .await
    }

    async fn load<F>(&self, source: ListingSource, fetch: F) -> bool
    where
        F: Future<Output = Vec<TitleSummary>>,
    {
        let ticket = self.guard.begin();
        {
            let mut state = self.state.write().await;
            state.source = Some(source.clone());
            state.titles = LoadState::Loading;
        }

        let titles = fetch.await;

        let mut state = self.state.write().await;
        if !self.guard.is_current(ticket) {
            log_debug!("Listing: dropping stale response for {:?}", source);
            return false;
        }
        state.titles = LoadState::from_items(titles);
        true
    }

    pub async fn state(&self) -> ListingState {
        self.state.read().await.clone()
    }

    /// Loaded titles as cards, with favorite flags from the shared owner
    pub async fn cards(&self) -> LoadState<Vec<TitleCard>> {
        let favorites = self.favorites.snapshot();
        match &self.state.read().await.titles {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Empty => LoadState::Empty,
            LoadState::Loaded(titles) => LoadState::Loaded(TitleCard::from_all(titles, &favorites)),
        }
    }

    /// Toggle a title shown in the current listing. Returns the new
    /// membership, or `None` when the id is not on screen.
    pub async fn toggle_favorite(&self, id: u32) -> Option<bool> {
        let item = {
            let state = self.state.read().await;
            state
                .titles
                .loaded()
                .and_then(|titles| titles.iter().find(|t| t.id == id))
                .map(FavoriteItem::from)
        };

        match item {
            Some(item) => Some(self.favorites.toggle(item)),
            None => {
                log_warn!("Listing: title {} is not on screen, ignoring toggle", id);
                None
            }
        }
    }

    /// Genre names for the search panel; fetched once, refetched after an
    /// empty result
    pub async fn genres(&self) -> LoadState<Vec<Genre>> {
        {
            let genres = self.genres.read().await;
            if genres.loaded().is_some() {
                return genres.clone();
            }
        }

        let mut genres = self.genres.write().await;
        if genres.loaded().is_none() {
            *genres = LoadState::from_items(self.catalog.list_genres().await);
        }
        genres.clone()
    }
}
