//! Bot abstraction for replies, media and message deletion.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.
//! All text arguments are MarkdownV2; callers escape dynamic parts.

use crate::core::error::{DbotError, Result};
use crate::core::types::{Chat, Message};
use async_trait::async_trait;

/// Outbound side of the messaging transport. Implementations make exactly one attempt per call.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message threaded as a reply to `message`.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a text message and returns its id (transport-specific, e.g. Telegram numeric string).
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Deletes a previously sent message.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
    /// Sends a photo by URL with an optional caption.
    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: Option<&str>) -> Result<()>;
    /// Sends a video by URL with an optional caption.
    async fn send_video(&self, chat: &Chat, video_url: &str, caption: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}
