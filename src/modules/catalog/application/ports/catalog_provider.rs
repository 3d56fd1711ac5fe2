use async_trait::async_trait;

use crate::modules::catalog::domain::{Category, Genre, TitleDetail, TitleSummary};
use crate::shared::errors::AppResult;

/// Port (interface) for the external movies catalog
/// Infrastructure provides the implementation (TMDB today)
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// First page of one of the fixed lists
    async fn list_by_category(&self, category: Category) -> AppResult<Vec<TitleSummary>>;

    /// Keyword search; callers never pass an empty keyword
    async fn search(&self, keyword: &str) -> AppResult<Vec<TitleSummary>>;

    /// Titles tagged with a genre, most popular first
    async fn list_by_genre(&self, genre_id: u32) -> AppResult<Vec<TitleSummary>>;

    /// Full detail with trailer and recommendations; `None` when the id is unknown
    async fn get_detail(&self, id: u32) -> AppResult<Option<TitleDetail>>;

    /// Genre vocabulary for the genre picker
    async fn list_genres(&self) -> AppResult<Vec<Genre>>;
}
