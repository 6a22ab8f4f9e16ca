//! HTTP implementation of [`TweetResolver`] for vxtwitter-compatible APIs (`GET {base}/{user}/status/{id}`).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::link::parse_tweet_link;
use crate::types::{Download, MediaType, ResolverResponse, TweetUser, VideoCandidate};
use crate::TweetResolver;

/// Longest error body kept in [`ResolveError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct VxTweet {
    #[serde(default)]
    text: String,
    #[serde(default)]
    user_name: String,
    #[serde(default)]
    user_screen_name: String,
    #[serde(default)]
    media_extended: Vec<VxMedia>,
}

#[derive(Debug, Deserialize)]
struct VxMedia {
    #[serde(rename = "type")]
    kind: String,
    url: String,
    #[serde(default)]
    size: Option<VxSize>,
}

#[derive(Debug, Deserialize)]
struct VxSize {
    width: u32,
    height: u32,
}

impl From<VxTweet> for ResolverResponse {
    fn from(tweet: VxTweet) -> Self {
        let tweet_user = TweetUser {
            name: tweet.user_name,
            username: tweet.user_screen_name,
            text: tweet.text,
        };

        let Some(first) = tweet.media_extended.first() else {
            return ResolverResponse::not_found(tweet_user);
        };

        let (media_type, download) = match first.kind.as_str() {
            "image" => (MediaType::Image, Download::Single(first.url.clone())),
            "video" | "gif" => {
                let candidates = tweet
                    .media_extended
                    .iter()
                    .filter(|m| m.kind == "video" || m.kind == "gif")
                    .map(|m| VideoCandidate {
                        url: m.url.clone(),
                        dimension: m
                            .size
                            .as_ref()
                            .map(|s| format!("{}x{}", s.width, s.height))
                            .unwrap_or_default(),
                    })
                    .collect();
                (MediaType::VideoGif, Download::Candidates(candidates))
            }
            other => (
                MediaType::Unsupported(other.to_string()),
                Download::default(),
            ),
        };

        ResolverResponse {
            found: true,
            media_type,
            download,
            tweet_user,
        }
    }
}

/// Resolver calling a vxtwitter-compatible JSON API over HTTP.
#[derive(Clone)]
pub struct HttpTweetResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTweetResolver {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds the HTTP client from config (base URL and optional user agent).
    pub fn from_config(config: &dyn ResolverConfig) -> Result<Self, ResolveError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = config.user_agent() {
            builder = builder.user_agent(ua.to_string());
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn status_url(&self, username: &str, status_id: &str) -> String {
        format!(
            "{}/{}/status/{}",
            self.base_url.trim_end_matches('/'),
            username,
            status_id
        )
    }
}

#[async_trait]
impl TweetResolver for HttpTweetResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, text: &str) -> Result<ResolverResponse, ResolveError> {
        let link =
            parse_tweet_link(text).ok_or_else(|| ResolveError::InvalidUrl(text.to_string()))?;
        let url = self.status_url(&link.username, &link.status_id);

        info!(
            username = %link.username,
            status_id = %link.status_id,
            url = %url,
            "Resolver request"
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Resolver returned error status");
            return Err(ResolveError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let tweet: VxTweet =
            serde_json::from_str(&body).map_err(|e| ResolveError::Decode(e.to_string()))?;
        debug!(media_count = tweet.media_extended.len(), "Resolver response decoded");

        let resolved = ResolverResponse::from(tweet);
        info!(
            found = resolved.found,
            media_type = %resolved.media_type.as_str(),
            "Resolver request completed"
        );
        Ok(resolved)
    }
}
