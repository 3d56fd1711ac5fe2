use crate::modules::catalog::domain::{RatingTier, TitleDetail, TitleSummary};
use crate::modules::favorites::{FavoriteItem, FavoritesCollection};
use serde::Serialize;

/// One poster card in a listing row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCard {
    pub id: u32,
    pub title: String,
    pub image: String,
    /// Release year on catalog cards, the stored date on favorites
    pub date_label: String,
    pub rating: u8,
    pub tier: RatingTier,
    pub is_favorite: bool,
}

impl TitleCard {
    pub fn new(title: &TitleSummary, favorites: &FavoritesCollection) -> Self {
        Self {
            id: title.id,
            title: title.title.clone(),
            image: title.poster_url.clone(),
            date_label: title.release_date.year(),
            rating: title.rating.value(),
            tier: title.rating.tier(),
            is_favorite: favorites.contains(title.id),
        }
    }

    pub fn from_all(titles: &[TitleSummary], favorites: &FavoritesCollection) -> Vec<Self> {
        titles.iter().map(|t| Self::new(t, favorites)).collect()
    }

    /// Card for the favorites screen, built only from the stored snapshot
    pub fn from_favorite(item: &FavoriteItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            image: item.image.clone(),
            date_label: item.release_date.clone(),
            rating: item.rating,
            tier: item.rating_tier(),
            is_favorite: true,
        }
    }
}

/// Hero section on the home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: u32,
    pub title: String,
    pub overview: String,
    pub image: String,
    pub backdrop: Option<String>,
    pub rating: u8,
    pub tier: RatingTier,
}

impl From<&TitleSummary> for Banner {
    fn from(title: &TitleSummary) -> Self {
        Self {
            id: title.id,
            title: title.title.clone(),
            overview: title.overview.clone(),
            image: title.poster_url.clone(),
            backdrop: title.backdrop_url.clone(),
            rating: title.rating.value(),
            tier: title.rating.tier(),
        }
    }
}

/// Everything the detail page renders, with labels already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub id: u32,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub image: String,
    pub backdrop: Option<String>,
    pub release_date: String,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub rating: u8,
    pub tier: RatingTier,
    pub trailer_url: Option<String>,
    pub is_favorite: bool,
    pub recommendations: Vec<TitleCard>,
}

impl DetailView {
    pub fn new(detail: &TitleDetail, favorites: &FavoritesCollection) -> Self {
        Self {
            id: detail.id,
            title: detail.title.clone(),
            tagline: detail.tagline.clone(),
            overview: detail.overview.clone(),
            image: detail.poster_url.clone(),
            backdrop: detail.backdrop_url.clone(),
            release_date: detail.release_date.human(),
            runtime: detail.runtime.map(|r| r.label()),
            genres: detail.genre_names().into_iter().map(str::to_string).collect(),
            rating: detail.rating.value(),
            tier: detail.rating.tier(),
            trailer_url: detail.trailer.as_ref().and_then(|clip| clip.watch_url()),
            is_favorite: favorites.contains(detail.id),
            recommendations: TitleCard::from_all(&detail.recommendations, favorites),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::{Genre, Rating, ReleaseDate, Runtime, VideoClip};

    fn summary(id: u32, score: f64) -> TitleSummary {
        TitleSummary {
            id,
            title: format!("Movie {}", id),
            overview: "Overview".to_string(),
            poster_url: "/placeholder.jpg".to_string(),
            backdrop_url: None,
            release_date: ReleaseDate::parse(Some("2019-07-02")),
            rating: Rating::from_vote_average(score),
            genre_ids: vec![],
        }
    }

    #[test]
    fn test_card_marks_favorites() {
        let first = summary(1, 8.0);
        let favorites = FavoritesCollection::from(vec![FavoriteItem::from(&first)]);

        let cards = TitleCard::from_all(&[first, summary(2, 5.5)], &favorites);
        assert!(cards[0].is_favorite);
        assert!(!cards[1].is_favorite);
        assert_eq!(cards[0].date_label, "2019");
        assert_eq!(cards[1].tier, RatingTier::Low);
    }

    #[test]
    fn test_banner_from_summary() {
        let banner = Banner::from(&summary(5, 6.1));
        assert_eq!(banner.rating, 61);
        assert_eq!(banner.tier, RatingTier::High);
    }

    #[test]
    fn test_detail_view_labels() {
        let detail = TitleDetail {
            id: 7,
            title: "Movie 7".to_string(),
            overview: String::new(),
            tagline: None,
            poster_url: "/placeholder.jpg".to_string(),
            backdrop_url: None,
            release_date: ReleaseDate::parse(Some("2022-05-24")),
            rating: Rating::from_vote_average(8.3),
            runtime: Runtime::from_minutes(Some(131)),
            genres: vec![Genre::new(28, "Action"), Genre::new(18, "Drama")],
            trailer: Some(VideoClip {
                key: "giXco2jaZ_4".to_string(),
                name: "Official Trailer".to_string(),
                site: "YouTube".to_string(),
                kind: "Trailer".to_string(),
                official: true,
            }),
            recommendations: vec![summary(8, 7.0)],
        };

        let view = DetailView::new(&detail, &FavoritesCollection::new());
        assert_eq!(view.release_date, "5/24/2022");
        assert_eq!(view.runtime.as_deref(), Some("2h 11min"));
        assert_eq!(view.genres, vec!["Action", "Drama"]);
        assert_eq!(
            view.trailer_url.as_deref(),
            Some("https://www.youtube.com/watch?v=giXco2jaZ_4")
        );
        assert_eq!(view.recommendations.len(), 1);
        assert!(!view.is_favorite);
    }
}
