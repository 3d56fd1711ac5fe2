use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed catalog lists a screen can browse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Popular,
    NowPlaying,
    TopRated,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Popular, Category::NowPlaying, Category::TopRated];

    /// Path segment under `/movie/`
    pub fn path(&self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::NowPlaying => "now_playing",
            Category::TopRated => "top_rated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::NowPlaying => "Now Playing",
            Category::TopRated => "Top Rated",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popular" => Ok(Category::Popular),
            "now_playing" | "now-playing" | "nowplaying" => Ok(Category::NowPlaying),
            "top_rated" | "top-rated" | "toprated" => Ok(Category::TopRated),
            other => Err(AppError::InvalidInput(format!(
                "Unknown category '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Category::Popular.path(), "popular");
        assert_eq!(Category::NowPlaying.path(), "now_playing");
        assert_eq!(Category::TopRated.path(), "top_rated");
    }

    #[test]
    fn test_parse() {
        assert_eq!("popular".parse::<Category>().unwrap(), Category::Popular);
        assert_eq!("Now-Playing".parse::<Category>().unwrap(), Category::NowPlaying);
        assert_eq!("top_rated".parse::<Category>().unwrap(), Category::TopRated);
        assert!("upcoming".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_round_trips_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
