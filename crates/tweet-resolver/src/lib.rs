//! # Tweet media resolver
//!
//! Defines the [`TweetResolver`] trait and an HTTP implementation ([`HttpTweetResolver`]) backed by a
//! vxtwitter-compatible JSON API. Transport-agnostic; used by tweet-bot's message handler.
//!
//! The resolver receives the raw message text and returns a [`ResolverResponse`]: whether media was
//! found, its type, the download URL(s) and the tweet author.

use async_trait::async_trait;

mod config;
mod error;
mod http_resolver;
mod link;
mod types;

pub use config::{EnvResolverConfig, ResolverConfig, DEFAULT_RESOLVER_BASE_URL};
pub use error::ResolveError;
pub use http_resolver::HttpTweetResolver;
pub use link::{parse_tweet_link, TweetLink};
pub use types::{Download, MediaType, ResolverResponse, TweetUser, VideoCandidate};

/// Resolves a tweet link (embedded in arbitrary text) into media metadata.
#[async_trait]
pub trait TweetResolver: Send + Sync {
    /// Resolves the first tweet link found in `text`. Errors cover unparsable input, transport and decoding failures.
    async fn resolve(&self, text: &str) -> Result<ResolverResponse, ResolveError>;
}
