//! Environment-backed configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file through `dotenvy`. Only the API credentials are required.

use crate::shared::errors::{AppError, AppResult};
use std::path::PathBuf;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_STORAGE_PATH: &str = "quickbet-storage.json";

#[derive(Debug, Clone, PartialEq)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Where confirmation e-mails send the user back to (`?code=` lands here)
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub supabase: SupabaseConfig,
    pub storage_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                AppError::ConfigurationError(format!("Missing required variable {}", key))
            })
        };

        let tmdb = TmdbConfig {
            api_key: require("TMDB_API_KEY")?,
            base_url: get("TMDB_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            image_base_url: get("TMDB_IMAGE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TMDB_IMAGE_BASE_URL.to_string()),
            language: get("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        };

        let supabase = SupabaseConfig {
            url: require("SUPABASE_URL")?.trim_end_matches('/').to_string(),
            anon_key: require("SUPABASE_ANON_KEY")?,
            redirect_url: get("AUTH_REDIRECT_URL"),
        };

        let storage_path = get("QUICKBET_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));

        Ok(Self {
            tmdb,
            supabase,
            storage_path,
        })
    }
}
