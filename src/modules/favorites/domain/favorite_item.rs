use crate::modules::catalog::domain::{Rating, RatingTier, TitleDetail, TitleSummary};
use serde::{Deserialize, Serialize};

/// Snapshot of a catalog title taken when it was favorited.
///
/// Stored by value so the favorites screen renders without touching the
/// catalog, and never drifts when the live catalog data changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub id: u32,
    pub title: String,
    /// Resolved poster URL or the placeholder sentinel
    pub image: String,
    /// Percentage, 0–100
    pub rating: u8,
    /// Human-formatted date or "Unknown"
    pub release_date: String,
}

impl FavoriteItem {
    pub fn rating_tier(&self) -> RatingTier {
        Rating::new(self.rating).tier()
    }
}

impl From<&TitleSummary> for FavoriteItem {
    fn from(title: &TitleSummary) -> Self {
        Self {
            id: title.id,
            title: title.title.clone(),
            image: title.poster_url.clone(),
            rating: title.rating.value(),
            release_date: title.release_date.human(),
        }
    }
}

impl From<&TitleDetail> for FavoriteItem {
    fn from(detail: &TitleDetail) -> Self {
        Self::from(&detail.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::ReleaseDate;

    #[test]
    fn test_snapshot_from_summary() {
        let summary = TitleSummary {
            id: 361743,
            title: "Top Gun: Maverick".to_string(),
            overview: "Overview".to_string(),
            poster_url: "https://image.tmdb.org/t/p/w500/poster.jpg".to_string(),
            backdrop_url: None,
            release_date: ReleaseDate::parse(Some("2022-05-24")),
            rating: Rating::from_vote_average(7.3),
            genre_ids: vec![28],
        };

        let item = FavoriteItem::from(&summary);
        assert_eq!(item.id, 361743);
        assert_eq!(item.rating, 73);
        assert_eq!(item.release_date, "5/24/2022");
        assert_eq!(item.image, summary.poster_url);
        assert_eq!(item.rating_tier(), RatingTier::High);
    }

    #[test]
    fn test_wire_shape() {
        let item = FavoriteItem {
            id: 7,
            title: "Se7en".to_string(),
            image: "/placeholder.jpg".to_string(),
            rating: 60,
            release_date: "Unknown".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Se7en",
                "image": "/placeholder.jpg",
                "rating": 60,
                "releaseDate": "Unknown"
            })
        );
        assert_eq!(item.rating_tier(), RatingTier::Low);
    }
}
