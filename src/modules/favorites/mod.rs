pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{FavoritesState, FavoritesStore, FAVORITES_KEY};
pub use domain::{FavoriteItem, FavoritesCollection, Toggle};
