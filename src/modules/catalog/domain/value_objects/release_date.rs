use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Shown wherever the catalog has no usable date
pub const UNKNOWN_DATE: &str = "Unknown";

/// Release date as reported by the catalog; TMDB sends "" for unknown dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseDate(Option<NaiveDate>);

impl ReleaseDate {
    /// Parse an ISO `YYYY-MM-DD` string, treating anything else as unknown
    pub fn parse(raw: Option<&str>) -> Self {
        let date = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        ReleaseDate(date)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Year label for listing cards
    pub fn year(&self) -> String {
        self.0
            .map(|d| d.year().to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string())
    }

    /// US-style `M/D/YYYY` label for detail pages and favorites
    pub fn human(&self) -> String {
        self.0
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string())
    }
}
