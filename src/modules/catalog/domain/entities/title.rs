use super::genre::Genre;
use super::video::VideoClip;
use crate::modules::catalog::domain::value_objects::{Rating, ReleaseDate, Runtime};
use serde::{Deserialize, Serialize};

/// Image shown when the catalog has no art for a title
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Most recommendations a detail page shows
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Card-sized view of a catalog title, as returned by list and search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummary {
    pub id: u32,
    pub title: String,
    pub overview: String,
    /// Resolved poster URL, or `PLACEHOLDER_IMAGE`
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub release_date: ReleaseDate,
    pub rating: Rating,
    pub genre_ids: Vec<u32>,
}

impl TitleSummary {
    pub fn has_poster(&self) -> bool {
        self.poster_url != PLACEHOLDER_IMAGE
    }
}

/// Everything a detail page renders for one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDetail {
    pub id: u32,
    pub title: String,
    pub overview: String,
    pub tagline: Option<String>,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub release_date: ReleaseDate,
    pub rating: Rating,
    pub runtime: Option<Runtime>,
    pub genres: Vec<Genre>,
    pub trailer: Option<VideoClip>,
    pub recommendations: Vec<TitleSummary>,
}

impl TitleDetail {
    /// Card view of this title (used when favoriting from a detail page)
    pub fn summary(&self) -> TitleSummary {
        TitleSummary {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone(),
            poster_url: self.poster_url.clone(),
            backdrop_url: self.backdrop_url.clone(),
            release_date: self.release_date,
            rating: self.rating,
            genre_ids: self.genres.iter().map(|g| g.id).collect(),
        }
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}
