pub mod state;
pub mod store;

pub use state::FavoritesState;
pub use store::{FavoritesStore, FAVORITES_KEY};
