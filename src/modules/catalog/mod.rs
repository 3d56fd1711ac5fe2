pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CatalogProvider, CatalogService};
pub use domain::{Category, Genre, Rating, RatingTier, ReleaseDate, TitleDetail, TitleSummary};
pub use infrastructure::TmdbAdapter;
