pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use entities::genre::Genre;
pub use entities::title::{TitleDetail, TitleSummary};
pub use entities::video::{select_trailer, VideoClip};
pub use value_objects::{Category, Rating, RatingTier, ReleaseDate, Runtime};
