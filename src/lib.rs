pub mod modules;
pub mod shared;

use modules::{
    auth::{AuthGateway, IdentityProvider, SupabaseAuthClient},
    browse::{DetailScreen, ListingScreen},
    catalog::{CatalogProvider, CatalogService, TmdbAdapter},
    favorites::{FavoritesState, FavoritesStore},
};
use shared::{
    storage::{JsonFileStorage, KeyValueStorage},
    utils::init_logger,
    AppConfig, AppResult,
};
use std::sync::Arc;

/// Everything a host UI binds to, wired over one key-value storage
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub favorites: Arc<FavoritesState>,
    pub auth: Arc<AuthGateway>,
    pub listing: Arc<ListingScreen>,
    pub detail: Arc<DetailScreen>,
}

impl AppServices {
    /// Load `.env` and the environment, open the storage file and wire the
    /// TMDB and Supabase adapters
    pub fn from_env() -> AppResult<Self> {
        init_logger();

        let config = AppConfig::from_env()?;
        log::info!("Storage file: {}", config.storage_path.display());
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(JsonFileStorage::new(config.storage_path.clone()));

        Ok(Self::from_config(&config, storage))
    }

    pub fn from_config(config: &AppConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let catalog_provider: Arc<dyn CatalogProvider> =
            Arc::new(TmdbAdapter::new(config.tmdb.clone()));
        let identity_provider: Arc<dyn IdentityProvider> =
            Arc::new(SupabaseAuthClient::new(config.supabase.clone()));

        Self::with_providers(catalog_provider, identity_provider, storage)
    }

    /// Wire arbitrary port implementations (fakes in tests, other providers)
    pub fn with_providers(
        catalog_provider: Arc<dyn CatalogProvider>,
        identity_provider: Arc<dyn IdentityProvider>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let catalog = Arc::new(CatalogService::new(catalog_provider));
        let favorites = Arc::new(FavoritesState::load(FavoritesStore::new(Arc::clone(
            &storage,
        ))));
        let auth = Arc::new(AuthGateway::new(identity_provider, storage));

        let listing = Arc::new(ListingScreen::new(
            Arc::clone(&catalog),
            Arc::clone(&favorites),
        ));
        let detail = Arc::new(DetailScreen::new(
            Arc::clone(&catalog),
            Arc::clone(&favorites),
        ));

        log::info!(
            "Services ready: {} favorites, signed in: {}",
            favorites.snapshot().len(),
            auth.is_signed_in()
        );

        Self {
            catalog,
            favorites,
            auth,
            listing,
            detail,
        }
    }
}
