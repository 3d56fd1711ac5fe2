use super::ports::CatalogProvider;
use crate::modules::catalog::domain::{Category, Genre, TitleDetail, TitleSummary};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_warn};
use std::sync::Arc;

/// Catalog facade used by the screens.
///
/// Every operation fails soft: provider errors are logged and turned into an
/// empty result so the calling screen falls back to its empty state.
pub struct CatalogService {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogService {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    pub async fn list_by_category(&self, category: Category) -> Vec<TitleSummary> {
        let timer = TimedOperation::new(&format!("list {}", category));
        match self.provider.list_by_category(category).await {
            Ok(titles) => {
                timer.finish_with_info(&format!("{} titles", titles.len()));
                titles
            }
            Err(e) => {
                LogContext::degraded(&format!("Listing {}", category.label()), &e);
                Vec::new()
            }
        }
    }

    /// Empty or whitespace-only keywords return nothing without a request
    pub async fn search(&self, keyword: &str) -> Vec<TitleSummary> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            log_debug!("Search: empty keyword, skipping request");
            return Vec::new();
        }

        LogContext::search_operation(keyword, None, None);
        match self.provider.search(keyword).await {
            Ok(titles) => {
                LogContext::search_operation(keyword, None, Some(titles.len()));
                titles
            }
            Err(e) => {
                LogContext::degraded(&format!("Search for '{}'", keyword), &e);
                Vec::new()
            }
        }
    }

    pub async fn list_by_genre(&self, genre_id: u32) -> Vec<TitleSummary> {
        match self.provider.list_by_genre(genre_id).await {
            Ok(titles) => titles,
            Err(e) => {
                LogContext::degraded(&format!("Listing genre {}", genre_id), &e);
                Vec::new()
            }
        }
    }

    pub async fn get_detail(&self, id: u32) -> Option<TitleDetail> {
        match self.provider.get_detail(id).await {
            Ok(Some(detail)) => Some(detail),
            Ok(None) => {
                log_warn!("Detail: no title with id {}", id);
                None
            }
            Err(e) => {
                LogContext::degraded(&format!("Detail for {}", id), &e);
                None
            }
        }
    }

    pub async fn list_genres(&self) -> Vec<Genre> {
        match self.provider.list_genres().await {
            Ok(genres) => genres,
            Err(e) => {
                LogContext::degraded("Genre list", &e);
                Vec::new()
            }
        }
    }

    /// Banner candidate: the first popular title
    pub async fn featured(&self) -> Option<TitleSummary> {
        self.list_by_category(Category::Popular).await.into_iter().next()
    }
}
