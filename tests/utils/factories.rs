/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog titles with sensible defaults
use chrono::{Duration, Utc};
use quickbet_lib::modules::{
    auth::{AuthUser, Session},
    catalog::{
        domain::{Genre, Rating, ReleaseDate, Runtime, VideoClip},
        TitleDetail, TitleSummary,
    },
};
use uuid::Uuid;

pub struct TitleFactory {
    id: u32,
    title: String,
    overview: String,
    poster_url: String,
    release_date: Option<String>,
    score: f64,
    genres: Vec<Genre>,
}

impl TitleFactory {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: format!("Test Movie {}", id),
            overview: "A test overview".to_string(),
            poster_url: "/placeholder.jpg".to_string(),
            release_date: Some("2022-05-24".to_string()),
            score: 7.5,
            genres: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn poster(mut self, url: &str) -> Self {
        self.poster_url = url.to_string();
        self
    }

    pub fn release_date(mut self, date: Option<&str>) -> Self {
        self.release_date = date.map(str::to_string);
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn genre(mut self, id: u32, name: &str) -> Self {
        self.genres.push(Genre::new(id, name));
        self
    }

    pub fn build(self) -> TitleSummary {
        TitleSummary {
            id: self.id,
            title: self.title,
            overview: self.overview,
            poster_url: self.poster_url,
            backdrop_url: None,
            release_date: ReleaseDate::parse(self.release_date.as_deref()),
            rating: Rating::from_vote_average(self.score),
            genre_ids: self.genres.iter().map(|g| g.id).collect(),
        }
    }

    pub fn build_detail(self) -> TitleDetail {
        let genres = self.genres.clone();
        let id = self.id;
        let summary = self.build();
        TitleDetail {
            id,
            title: summary.title,
            overview: summary.overview,
            tagline: None,
            poster_url: summary.poster_url,
            backdrop_url: None,
            release_date: summary.release_date,
            rating: summary.rating,
            runtime: Runtime::from_minutes(Some(131)),
            genres,
            trailer: Some(VideoClip {
                key: format!("trailer-{}", id),
                name: "Official Trailer".to_string(),
                site: "YouTube".to_string(),
                kind: "Trailer".to_string(),
                official: true,
            }),
            recommendations: Vec::new(),
        }
    }
}

pub fn session(email: &str) -> Session {
    session_expiring_in(email, Duration::hours(1))
}

pub fn session_expiring_in(email: &str, lifetime: Duration) -> Session {
    Session {
        access_token: format!("access-{}", email),
        refresh_token: format!("refresh-{}", email),
        token_type: "bearer".to_string(),
        expires_at: Some(Utc::now() + lifetime),
        user: AuthUser {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
        },
    }
}
