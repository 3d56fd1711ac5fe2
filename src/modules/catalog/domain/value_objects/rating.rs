use serde::{Deserialize, Serialize};

/// Audience score as a whole percentage (0–100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

/// Colour band of the score ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingTier {
    /// Red ring, score <= 60
    Low,
    /// Green ring
    High,
}

impl Rating {
    /// Ceiling of the low band (inclusive)
    pub const LOW_THRESHOLD: u8 = 60;

    /// Convert a 0–10 vote average into a percentage: `round(score * 10)`
    pub fn from_vote_average(score: f64) -> Self {
        if !score.is_finite() {
            return Rating(0);
        }
        let percent = (score * 10.0).round().clamp(0.0, 100.0);
        Rating(percent as u8)
    }

    pub fn new(percent: u8) -> Self {
        Rating(percent.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tier(&self) -> RatingTier {
        if self.0 <= Self::LOW_THRESHOLD {
            RatingTier::Low
        } else {
            RatingTier::High
        }
    }
}

impl From<Option<f64>> for Rating {
    fn from(score: Option<f64>) -> Self {
        score.map(Rating::from_vote_average).unwrap_or_default()
    }
}
