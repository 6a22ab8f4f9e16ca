//! # Tweet handler
//!
//! Handles every text message that is not a command:
//! 1. `t.co` short links are rejected;
//! 2. text that does not look like a tweet URL is rejected;
//! 3. otherwise a "Downloading" status is shown (and deleted later), the tweet is resolved and its
//!    media is sent back with a caption.
//!
//! Failures of the two rejection replies and of the status message propagate to the caller.
//! Failures while resolving or sending media are classified and answered here.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};
use tweet_resolver::{MediaType, ResolveError, ResolverResponse, TweetResolver};

use crate::core::{Bot, DbotError, Handler, HandlerResponse, Message, Result};

use super::error_classifier::{classify, ErrorClass};
use super::media::{build_caption, select_best_candidate};
use super::replies;
use super::status::{schedule_deletion, StatusMessage, DEFAULT_STATUS_DELETE_DELAY};

/// Default upper bound for one resolver call.
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Timing knobs for [`TweetHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweetHandlerSettings {
    /// Delay before the "Downloading" status message is deleted.
    pub status_delete_delay: Duration,
    /// Upper bound for one resolver call.
    pub resolve_timeout: Duration,
}

impl Default for TweetHandlerSettings {
    fn default() -> Self {
        Self {
            status_delete_delay: DEFAULT_STATUS_DELETE_DELAY,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
        }
    }
}

/// True when `text` contains a `t.co` short link.
pub fn is_short_link(text: &str) -> bool {
    text.contains("t.co")
}

/// True when `text` mentions https and a Twitter domain.
pub fn looks_like_tweet_url(text: &str) -> bool {
    text.contains("https") && (text.contains("twitter.com") || text.contains("x.com/"))
}

/// Turns tweet links into media replies.
pub struct TweetHandler {
    bot: Arc<dyn Bot>,
    resolver: Arc<dyn TweetResolver>,
    settings: TweetHandlerSettings,
}

impl TweetHandler {
    pub fn new(bot: Arc<dyn Bot>, resolver: Arc<dyn TweetResolver>) -> Self {
        Self::with_settings(bot, resolver, TweetHandlerSettings::default())
    }

    pub fn with_settings(
        bot: Arc<dyn Bot>,
        resolver: Arc<dyn TweetResolver>,
        settings: TweetHandlerSettings,
    ) -> Self {
        Self {
            bot,
            resolver,
            settings,
        }
    }

    async fn resolve(&self, text: &str) -> Result<ResolverResponse> {
        let timeout = self.settings.resolve_timeout;
        match tokio::time::timeout(timeout, self.resolver.resolve(text)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ResolveError::Timeout(timeout).into()),
        }
    }

    /// Resolves the tweet in `message` and sends its media. No reply when the tweet has no supported media.
    async fn download_and_reply(&self, message: &Message) -> Result<()> {
        let response = self.resolve(&message.content).await?;

        if !response.found {
            info!(user_id = message.user.id, "Tweet has no media");
            return Ok(());
        }

        let caption = build_caption(&response.tweet_user);
        match &response.media_type {
            MediaType::Image => {
                let Some(url) = response.download.single_url() else {
                    warn!(user_id = message.user.id, "Image response without a download URL");
                    return Ok(());
                };
                self.bot.send_photo(&message.chat, url, Some(&caption)).await?;
                info!(user_id = message.user.id, url = %url, "Photo sent");
            }
            MediaType::VideoGif => {
                let Some(best) = select_best_candidate(response.download.candidates()) else {
                    warn!(user_id = message.user.id, "Video response without candidates");
                    return Ok(());
                };
                self.bot
                    .send_video(&message.chat, &best.url, Some(&caption))
                    .await?;
                info!(
                    user_id = message.user.id,
                    url = %best.url,
                    dimension = %best.dimension,
                    "Video sent"
                );
            }
            MediaType::Unsupported(kind) => {
                info!(user_id = message.user.id, media_type = %kind, "Unsupported media type");
            }
        }
        Ok(())
    }

    /// Replies to `message` according to the class of `err`.
    async fn reply_with_error(&self, message: &Message, err: &DbotError) -> Result<()> {
        let class = classify(err);
        match class.handler_reply() {
            None => {
                if class == ErrorClass::BotBlocked {
                    info!(user_id = message.user.id, "Bot blocked by user");
                }
                Ok(())
            }
            Some(text) => self.bot.reply_to(message, &text).await,
        }
    }
}

#[async_trait]
impl Handler for TweetHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.as_str();

        if is_short_link(text) {
            self.bot.reply_to(message, &replies::short_links_text()).await?;
            return Ok(HandlerResponse::Stop);
        }

        if !looks_like_tweet_url(text) {
            self.bot.reply_to(message, &replies::invalid_tweet_text()).await?;
            return Ok(HandlerResponse::Stop);
        }

        let status_id = self
            .bot
            .send_message_and_return_id(&message.chat, &replies::downloading_text())
            .await?;
        // Detached: runs even if resolution below outlives the delay.
        let _cleanup = schedule_deletion(
            self.bot.clone(),
            StatusMessage {
                chat: message.chat.clone(),
                message_id: status_id,
            },
            self.settings.status_delete_delay,
        );

        if let Err(e) = self.download_and_reply(message).await {
            error!(error = %e, user_id = message.user.id, "Failed to download tweet media");
            self.reply_with_error(message, &e).await?;
        }

        Ok(HandlerResponse::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_short_link() {
        assert!(is_short_link("look https://t.co/abc"));
        assert!(!is_short_link("https://twitter.com/jack/status/20"));
    }

    #[test]
    fn test_looks_like_tweet_url() {
        assert!(looks_like_tweet_url("https://twitter.com/jack/status/20"));
        assert!(looks_like_tweet_url("see https://x.com/jack/status/20"));
        assert!(!looks_like_tweet_url("http://twitter.com/jack/status/20"));
        assert!(!looks_like_tweet_url("https://example.com/jack"));
        assert!(!looks_like_tweet_url("hello"));
    }

    #[test]
    fn test_default_settings() {
        let settings = TweetHandlerSettings::default();
        assert_eq!(settings.status_delete_delay, Duration::from_millis(3000));
        assert_eq!(settings.resolve_timeout, Duration::from_secs(30));
    }
}
