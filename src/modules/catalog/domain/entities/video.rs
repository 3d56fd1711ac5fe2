use serde::{Deserialize, Serialize};

const TRAILER_KIND: &str = "Trailer";

/// Video attached to a title (trailer, teaser, clip...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoClip {
    /// Site-specific id, e.g. the YouTube video id
    pub key: String,
    pub name: String,
    pub site: String,
    pub kind: String,
    pub official: bool,
}

impl VideoClip {
    pub fn is_trailer(&self) -> bool {
        self.kind == TRAILER_KIND
    }

    /// Watch URL, when the hosting site is one we know how to link
    pub fn watch_url(&self) -> Option<String> {
        match self.site.as_str() {
            "YouTube" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            "Vimeo" => Some(format!("https://vimeo.com/{}", self.key)),
            _ => None,
        }
    }
}

/// First official trailer, else first trailer of any kind, else nothing
pub fn select_trailer(clips: Vec<VideoClip>) -> Option<VideoClip> {
    let official = clips.iter().position(|c| c.is_trailer() && c.official);
    let any = clips.iter().position(VideoClip::is_trailer);
    official.or(any).map(|index| clips[index].clone())
}
