//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Texts are sent as MarkdownV2 and every
//! failed call becomes a [`TransportError`] with a structured kind.

use crate::core::{
    parse_message_id, ApiMethod, Bot as CoreBot, Chat, DbotError, Message, Result,
    TransportError, TransportErrorKind,
};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, MessageId, ParseMode, ReplyParameters},
    ApiError, RequestError,
};

/// Maps a teloxide failure of `method` to a [`TransportError`].
pub fn transport_error(method: ApiMethod, err: RequestError) -> TransportError {
    match err {
        RequestError::Api(ApiError::BotBlocked) => TransportError::new(
            method,
            TransportErrorKind::BotBlocked,
            ApiError::BotBlocked.to_string(),
        ),
        RequestError::Api(api) => TransportError::from_description(method, &api.to_string()),
        RequestError::Network(e) => {
            TransportError::new(method, TransportErrorKind::Network, e.to_string())
        }
        RequestError::Io(e) => TransportError::new(method, TransportErrorKind::Network, e.to_string()),
        other @ RequestError::InvalidJson { .. } => {
            TransportError::new(method, TransportErrorKind::Other, other.to_string())
        }
        other => TransportError::new(method, TransportErrorKind::Api, other.to_string()),
    }
}

fn media_url(url: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(url).map_err(|e| DbotError::Bot(format!("Invalid media URL {}: {}", url, e)))
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| transport_error(ApiMethod::SendMessage, e))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let reply_to = parse_message_id(&message.id)?;
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .reply_parameters(ReplyParameters::new(MessageId(reply_to)))
            .await
            .map_err(|e| transport_error(ApiMethod::SendMessage, e))?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| transport_error(ApiMethod::SendMessage, e))?;
        Ok(sent.id.to_string())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(|e| transport_error(ApiMethod::DeleteMessage, e))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::url(media_url(photo_url)?));
        if let Some(caption) = caption {
            request = request
                .caption(caption.to_string())
                .parse_mode(ParseMode::MarkdownV2);
        }
        request
            .await
            .map_err(|e| transport_error(ApiMethod::SendPhoto, e))?;
        Ok(())
    }

    async fn send_video(&self, chat: &Chat, video_url: &str, caption: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .send_video(ChatId(chat.id), InputFile::url(media_url(video_url)?));
        if let Some(caption) = caption {
            request = request
                .caption(caption.to_string())
                .parse_mode(ParseMode::MarkdownV2);
        }
        request
            .await
            .map_err(|e| transport_error(ApiMethod::SendVideo, e))?;
        Ok(())
    }
}
