use super::cards::{Banner, TitleCard};
use crate::modules::catalog::{CatalogService, Category};
use crate::modules::favorites::FavoritesState;
use crate::shared::application::LoadState;
use serde::Serialize;

/// One labelled row of cards on the home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub category: Category,
    pub label: String,
    pub cards: LoadState<Vec<TitleCard>>,
}

/// Hero banner: the first title of the popular list
pub async fn load_banner(catalog: &CatalogService) -> LoadState<Banner> {
    catalog.featured().await.as_ref().map(Banner::from).into()
}

/// All category rows, fetched concurrently, in display order
pub async fn load_rows(catalog: &CatalogService, favorites: &FavoritesState) -> Vec<Row> {
    let fetches = Category::ALL
        .into_iter()
        .map(|category| async move { (category, catalog.list_by_category(category).await) });
    let settled = futures::future::join_all(fetches).await;

    let collection = favorites.snapshot();
    settled
        .into_iter()
        .map(|(category, titles)| Row {
            category,
            label: category.label().to_string(),
            cards: LoadState::from_items(TitleCard::from_all(&titles, &collection)),
        })
        .collect()
}

/// Favorites screen, rendered from the stored snapshots without any catalog
/// request
pub fn favorite_cards(favorites: &FavoritesState) -> LoadState<Vec<TitleCard>> {
    let collection = favorites.snapshot();
    LoadState::from_items(collection.items().iter().map(TitleCard::from_favorite).collect())
}

/// Remove a title from the favorites screen. False if it was not there.
pub fn unfavorite(favorites: &FavoritesState, id: u32) -> bool {
    match favorites.snapshot().get(id).cloned() {
        Some(item) => !favorites.toggle(item),
        None => false,
    }
}
