use serde::{Deserialize, Serialize};

// Response envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbError {
    pub status_code: u16,
    pub status_message: String,
    #[serde(default)]
    pub success: Option<bool>,
}

// List/search item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

// `/movie/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Option<Vec<TmdbGenre>>,
    #[serde(default)]
    pub status: Option<String>, // "Released", "Post Production", ...
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

// Videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<Video>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    #[serde(default)]
    pub name: String,
    pub key: String,  // YouTube video ID
    pub site: String, // "YouTube"
    #[serde(default)]
    pub size: Option<u32>, // 1080, 720, etc.
    pub r#type: String, // "Trailer", "Teaser", "Clip", "Featurette", "Behind the Scenes"
    #[serde(default)]
    pub official: Option<bool>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

// Genres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbGenre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}
