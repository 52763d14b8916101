use regex::Regex;
use std::sync::LazyLock;

/// Length of a video identifier on the platform.
///
/// The extraction pattern is deliberately permissive, so this length check
/// is what actually rejects non-video URLs. Kept as a named constant in case
/// the platform ever changes its id format.
pub const VIDEO_ID_LEN: usize = 11;

// Covers short-link, /v/, /u/<c>/, embed and watch?v= URL shapes.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|embed/|watch\?v=|&v=)([^#&?]*)").unwrap()
});

/// Thumbnail quality tier on the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailQuality {
    /// Highest available resolution, used for hero displays.
    #[default]
    MaxRes,
    /// Medium resolution for compact cards.
    Medium,
}

impl ThumbnailQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault",
            ThumbnailQuality::Medium => "mqdefault",
        }
    }
}

/// Extract the video identifier from a video URL.
///
/// Returns `None` unless the candidate segment has exactly [`VIDEO_ID_LEN`]
/// characters. Empty input is `None`, not an error.
pub fn video_id(url: &str) -> Option<&str> {
    if url.is_empty() {
        return None;
    }
    let id = VIDEO_ID_PATTERN.captures(url)?.get(1)?.as_str();
    (id.len() == VIDEO_ID_LEN).then_some(id)
}

/// Build a thumbnail URL for a video URL.
///
/// Returns `None` when no valid video id can be extracted ("no thumbnail
/// available"). String-only; never touches the network.
pub fn video_thumbnail(url: &str, quality: ThumbnailQuality) -> Option<String> {
    let id = video_id(url)?;
    Some(format!(
        "https://i.ytimg.com/vi/{}/{}.jpg",
        id,
        quality.as_str()
    ))
}
