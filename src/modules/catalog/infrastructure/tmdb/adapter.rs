use crate::{
    modules::catalog::{
        application::ports::CatalogProvider,
        domain::{Category, Genre, TitleDetail, TitleSummary},
    },
    shared::{
        config::TmdbConfig,
        errors::{AppError, AppResult},
        infrastructure::ThrottledClient,
        utils::Validator,
    },
};
use async_trait::async_trait;

use super::{mapper::TmdbMapper, models::*};

/// TMDB (The Movie Database) catalog adapter over the v3 REST API
pub struct TmdbAdapter {
    http_client: ThrottledClient,
    config: TmdbConfig,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(config: TmdbConfig) -> Self {
        Self::with_client(ThrottledClient::for_tmdb(), config)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: ThrottledClient, config: TmdbConfig) -> Self {
        let mapper = TmdbMapper::new(config.image_base_url.clone());
        Self {
            http_client,
            config,
            mapper,
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    pub fn mapper(&self) -> &TmdbMapper {
        &self.mapper
    }

    /// Build URL with API key, language and additional query parameters
    pub fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}&language={}",
            self.config.base_url,
            endpoint,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(&self.config.language)
        );
        for (key, value) in params {
            if *key != "api_key" && *key != "language" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }

    async fn fetch_page(&self, endpoint: &str, params: &[(&str, String)]) -> AppResult<MoviePage> {
        let url = self.build_url(endpoint, params);
        self.http_client.get(&url, &[]).await
    }

    async fn fetch_details(&self, id: u32) -> AppResult<Option<MovieDetails>> {
        let url = self.build_url(&format!("/movie/{}", id), &[]);
        match self.http_client.get::<MovieDetails>(&url, &[]).await {
            Ok(details) => Ok(Some(details)),
            Err(e) if e.is_not_found() => {
                log::info!("TMDB: No movie found for ID '{}'", id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_videos(&self, id: u32) -> AppResult<Vec<Video>> {
        let url = self.build_url(&format!("/movie/{}/videos", id), &[]);
        let response: VideosResponse = self.http_client.get(&url, &[]).await?;
        Ok(response.results.unwrap_or_default())
    }

    /// Combine the three detail responses. Only a failed details call is fatal.
    fn assemble_detail(
        &self,
        id: u32,
        details: AppResult<Option<MovieDetails>>,
        recommendations: AppResult<MoviePage>,
        videos: AppResult<Vec<Video>>,
    ) -> AppResult<Option<TitleDetail>> {
        let details = match details? {
            Some(details) => details,
            None => return Ok(None),
        };

        // Side panels are optional; the page still renders without them
        let recommendations = recommendations.map(|page| page.results).unwrap_or_else(|e| {
            log::warn!("TMDB: Recommendations for '{}' unavailable: {}", id, e);
            Vec::new()
        });
        let videos = videos.unwrap_or_else(|e| {
            log::warn!("TMDB: Videos for '{}' unavailable: {}", id, e);
            Vec::new()
        });

        Ok(Some(self.mapper.map_detail(details, recommendations, videos)))
    }
}

#[async_trait]
impl CatalogProvider for TmdbAdapter {
    async fn list_by_category(&self, category: Category) -> AppResult<Vec<TitleSummary>> {
        log::info!("TMDB: Getting '{}' movies", category);

        let page = self
            .fetch_page(
                &format!("/movie/{}", category.path()),
                &[("page", "1".to_string())],
            )
            .await?;

        log::info!("TMDB: Found {} '{}' movies", page.results.len(), category);
        Ok(self.mapper.map_summaries(page.results))
    }

    async fn search(&self, keyword: &str) -> AppResult<Vec<TitleSummary>> {
        if keyword.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search keyword cannot be empty".to_string(),
            ));
        }

        log::info!("TMDB: Searching for '{}'", keyword);

        let page = self
            .fetch_page(
                "/search/movie",
                &[
                    ("query", keyword.to_string()),
                    ("page", "1".to_string()),
                    ("include_adult", "false".to_string()),
                ],
            )
            .await?;

        log::info!("TMDB: Found {} results for '{}'", page.results.len(), keyword);
        Ok(self.mapper.map_summaries(page.results))
    }

    async fn list_by_genre(&self, genre_id: u32) -> AppResult<Vec<TitleSummary>> {
        log::info!("TMDB: Discovering movies for genre {}", genre_id);

        let page = self
            .fetch_page(
                "/discover/movie",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("sort_by", "popularity.desc".to_string()),
                    ("page", "1".to_string()),
                ],
            )
            .await?;

        log::info!("TMDB: Discovered {} movies for genre {}", page.results.len(), genre_id);
        Ok(self.mapper.map_summaries(page.results))
    }

    async fn get_detail(&self, id: u32) -> AppResult<Option<TitleDetail>> {
        Validator::validate_title_id(id)?;

        log::info!("TMDB: Getting details for movie ID '{}'", id);

        let recommendations_endpoint = format!("/movie/{}/recommendations", id);
        let first_page = [("page", "1".to_string())];
        let (details, recommendations, videos) = futures::join!(
            self.fetch_details(id),
            self.fetch_page(&recommendations_endpoint, &first_page),
            self.fetch_videos(id),
        );

        let detail = match self.assemble_detail(id, details, recommendations, videos)? {
            Some(detail) => detail,
            None => return Ok(None),
        };
        log::info!(
            "TMDB: Retrieved '{}' ({} recommendations, trailer: {})",
            detail.title,
            detail.recommendations.len(),
            detail.trailer.is_some()
        );
        Ok(Some(detail))
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        let url = self.build_url("/genre/movie/list", &[]);

        log::info!("TMDB: Getting movie genres");

        let response: GenreListResponse = self.http_client.get(&url, &[]).await?;
        Ok(response
            .genres
            .into_iter()
            .map(|g| self.mapper.map_genre(g))
            .collect())
    }
}
