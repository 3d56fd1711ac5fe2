pub mod tmdb;

// Re-export commonly used types
pub use tmdb::{TmdbAdapter, TmdbMapper};
