/// Test doubles for the catalog and identity ports, and service builders
use async_trait::async_trait;
use mockall::mock;
use quickbet_lib::{
    modules::{
        auth::{Credentials, IdentityProvider, Session, SignUpOutcome},
        catalog::{CatalogProvider, Category, Genre, TitleDetail, TitleSummary},
    },
    shared::{storage::KeyValueStorage, AppResult},
    AppServices,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogProvider for Catalog {
        async fn list_by_category(&self, category: Category) -> AppResult<Vec<TitleSummary>>;
        async fn search(&self, keyword: &str) -> AppResult<Vec<TitleSummary>>;
        async fn list_by_genre(&self, genre_id: u32) -> AppResult<Vec<TitleSummary>>;
        async fn get_detail(&self, id: u32) -> AppResult<Option<TitleDetail>>;
        async fn list_genres(&self) -> AppResult<Vec<Genre>>;
    }
}

mock! {
    pub Identity {}

    #[async_trait]
    impl IdentityProvider for Identity {
        async fn sign_in_with_password(&self, credentials: &Credentials) -> AppResult<Session>;
        async fn sign_up(
            &self,
            credentials: &Credentials,
            code_challenge: &str,
        ) -> AppResult<SignUpOutcome>;
        async fn sign_out(&self, access_token: &str) -> AppResult<()>;
        async fn exchange_code_for_session(
            &self,
            auth_code: &str,
            code_verifier: &str,
        ) -> AppResult<Session>;
    }
}

/// Catalog whose search and detail responses settle after a per-key delay,
/// for exercising out-of-order responses
#[derive(Default)]
pub struct DelayedCatalog {
    searches: HashMap<String, (Duration, Vec<TitleSummary>)>,
    details: HashMap<u32, (Duration, TitleDetail)>,
}

impl DelayedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_result(mut self, keyword: &str, delay_ms: u64, titles: Vec<TitleSummary>) -> Self {
        self.searches
            .insert(keyword.to_string(), (Duration::from_millis(delay_ms), titles));
        self
    }

    pub fn detail(mut self, detail: TitleDetail, delay_ms: u64) -> Self {
        self.details
            .insert(detail.id, (Duration::from_millis(delay_ms), detail));
        self
    }
}

#[async_trait]
impl CatalogProvider for DelayedCatalog {
    async fn list_by_category(&self, _category: Category) -> AppResult<Vec<TitleSummary>> {
        Ok(Vec::new())
    }

    async fn search(&self, keyword: &str) -> AppResult<Vec<TitleSummary>> {
        match self.searches.get(keyword) {
            Some((delay, titles)) => {
                tokio::time::sleep(*delay).await;
                Ok(titles.clone())
            }
            None => Ok(Vec::new()),
        }
    }

    async fn list_by_genre(&self, _genre_id: u32) -> AppResult<Vec<TitleSummary>> {
        Ok(Vec::new())
    }

    async fn get_detail(&self, id: u32) -> AppResult<Option<TitleDetail>> {
        match self.details.get(&id) {
            Some((delay, detail)) => {
                tokio::time::sleep(*delay).await;
                Ok(Some(detail.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        Ok(Vec::new())
    }
}

/// Wire services over a catalog double, an identity mock with no
/// expectations and the given storage
pub fn build_test_services(
    catalog: impl CatalogProvider + 'static,
    storage: Arc<dyn KeyValueStorage>,
) -> AppServices {
    AppServices::with_providers(Arc::new(catalog), Arc::new(MockIdentity::new()), storage)
}
