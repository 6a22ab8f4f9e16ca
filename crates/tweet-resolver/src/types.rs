//! Resolver result types. Serialized in the `found` / `type` / `download` / `tweet_user` shape.

use serde::{Deserialize, Serialize};

/// Kind of media attached to a tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    /// Videos and animated gifs share one type; both come with several size candidates.
    VideoGif,
    Unsupported(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::VideoGif => "video/gif",
            MediaType::Unsupported(s) => s.as_str(),
        }
    }
}

impl Default for MediaType {
    fn default() -> Self {
        MediaType::Unsupported(String::new())
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "image" => MediaType::Image,
            "video/gif" => MediaType::VideoGif,
            _ => MediaType::Unsupported(s),
        }
    }
}

impl From<MediaType> for String {
    fn from(t: MediaType) -> Self {
        t.as_str().to_string()
    }
}

/// One downloadable rendition of a video or gif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCandidate {
    pub url: String,
    /// `"<width>x<height>"`, e.g. `"1280x720"`.
    #[serde(default)]
    pub dimension: String,
}

impl VideoCandidate {
    /// Leading numeric component of `dimension` (the part before `x`). None when it does not parse.
    pub fn width(&self) -> Option<u32> {
        self.dimension.split('x').next()?.trim().parse().ok()
    }
}

/// Download location(s): a single URL for images, size candidates (in no particular order) for videos/gifs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Download {
    Single(String),
    Candidates(Vec<VideoCandidate>),
}

impl Default for Download {
    fn default() -> Self {
        Download::Candidates(Vec::new())
    }
}

impl Download {
    pub fn single_url(&self) -> Option<&str> {
        match self {
            Download::Single(url) => Some(url.as_str()),
            Download::Candidates(_) => None,
        }
    }

    pub fn candidates(&self) -> &[VideoCandidate] {
        match self {
            Download::Single(_) => &[],
            Download::Candidates(c) => c.as_slice(),
        }
    }
}

/// Tweet author and text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetUser {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub text: String,
}

/// Structured result of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverResponse {
    pub found: bool,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub download: Download,
    #[serde(default)]
    pub tweet_user: TweetUser,
}

impl ResolverResponse {
    /// Response for a tweet without media.
    pub fn not_found(tweet_user: TweetUser) -> Self {
        Self {
            found: false,
            media_type: MediaType::default(),
            download: Download::default(),
            tweet_user,
        }
    }
}
