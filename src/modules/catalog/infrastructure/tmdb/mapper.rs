use super::models::{Movie, MovieDetails, TmdbGenre, Video};
use crate::modules::catalog::domain::{
    entities::title::{MAX_RECOMMENDATIONS, PLACEHOLDER_IMAGE},
    select_trailer, Genre, Rating, ReleaseDate, Runtime, TitleDetail, TitleSummary, VideoClip,
};

/// Poster size used for cards and favorites
pub const POSTER_SIZE: &str = "w500";
/// Backdrop size used behind detail pages
pub const BACKDROP_SIZE: &str = "original";

/// TMDB to domain mapper
#[derive(Debug, Clone)]
pub struct TmdbMapper {
    image_base_url: String,
}

impl TmdbMapper {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build full image URL from file path
    pub fn build_image_url(&self, file_path: &str, size: &str) -> String {
        format!("{}/{}{}", self.image_base_url, size, file_path)
    }

    /// Poster URL, or the placeholder when TMDB has no poster
    fn poster_url(&self, poster_path: &Option<String>) -> String {
        Self::non_empty(poster_path)
            .map(|path| self.build_image_url(path, POSTER_SIZE))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    fn backdrop_url(&self, backdrop_path: &Option<String>) -> Option<String> {
        Self::non_empty(backdrop_path).map(|path| self.build_image_url(path, BACKDROP_SIZE))
    }

    fn non_empty(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Localized title first, then original title
    fn title_of(title: &Option<String>, original_title: &Option<String>) -> String {
        Self::non_empty(title)
            .or_else(|| Self::non_empty(original_title))
            .unwrap_or("Untitled")
            .to_string()
    }

    pub fn map_summary(&self, movie: Movie) -> TitleSummary {
        TitleSummary {
            id: movie.id,
            title: Self::title_of(&movie.title, &movie.original_title),
            overview: movie.overview.unwrap_or_default(),
            poster_url: self.poster_url(&movie.poster_path),
            backdrop_url: self.backdrop_url(&movie.backdrop_path),
            release_date: ReleaseDate::parse(movie.release_date.as_deref()),
            rating: Rating::from(movie.vote_average),
            genre_ids: movie.genre_ids.unwrap_or_default(),
        }
    }

    pub fn map_summaries(&self, movies: Vec<Movie>) -> Vec<TitleSummary> {
        movies.into_iter().map(|m| self.map_summary(m)).collect()
    }

    pub fn map_genre(&self, genre: TmdbGenre) -> Genre {
        Genre::new(genre.id, genre.name)
    }

    pub fn map_video(&self, video: Video) -> VideoClip {
        VideoClip {
            key: video.key,
            name: video.name,
            site: video.site,
            kind: video.r#type,
            official: video.official.unwrap_or(false),
        }
    }

    /// Combine the three detail responses into one detail view
    pub fn map_detail(
        &self,
        details: MovieDetails,
        recommendations: Vec<Movie>,
        videos: Vec<Video>,
    ) -> TitleDetail {
        let trailer = select_trailer(videos.into_iter().map(|v| self.map_video(v)).collect());
        let recommendations = recommendations
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|m| self.map_summary(m))
            .collect();

        TitleDetail {
            id: details.id,
            title: Self::title_of(&details.title, &details.original_title),
            overview: details.overview.unwrap_or_default(),
            tagline: details.tagline.filter(|t| !t.trim().is_empty()),
            poster_url: self.poster_url(&details.poster_path),
            backdrop_url: self.backdrop_url(&details.backdrop_path),
            release_date: ReleaseDate::parse(details.release_date.as_deref()),
            rating: Rating::from(details.vote_average),
            runtime: Runtime::from_minutes(details.runtime),
            genres: details
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| self.map_genre(g))
                .collect(),
            trailer,
            recommendations,
        }
    }
}
