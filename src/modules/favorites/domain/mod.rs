pub mod favorite_item;
pub mod favorites_collection;

// Re-exports for easy access
pub use favorite_item::FavoriteItem;
pub use favorites_collection::{FavoritesCollection, Toggle};
