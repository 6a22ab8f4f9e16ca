//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error. [`TransportError`] is produced at the transport boundary
//! with a structured [`TransportErrorKind`], so callers branch on kinds instead of message text.

use std::fmt;
use thiserror::Error;
use tweet_resolver::ResolveError;

/// Telegram text reported for a bot the user has blocked.
pub const BOT_BLOCKED_DESCRIPTION: &str = "bot was blocked by the user";

/// Bot API method that produced a [`TransportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    GetMe,
    SetMyCommands,
    SendMessage,
    SendPhoto,
    SendVideo,
    DeleteMessage,
}

impl ApiMethod {
    /// Bot API method name, e.g. `sendVideo`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::GetMe => "getMe",
            ApiMethod::SetMyCommands => "setMyCommands",
            ApiMethod::SendMessage => "sendMessage",
            ApiMethod::SendPhoto => "sendPhoto",
            ApiMethod::SendVideo => "sendVideo",
            ApiMethod::DeleteMessage => "deleteMessage",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong talking to the Bot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The recipient blocked the bot; nothing can be delivered to them.
    BotBlocked,
    /// Any other error answered by the Bot API.
    Api,
    /// The Bot API could not be reached.
    Network,
    Other,
}

/// Failed Bot API call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Call to '{method}' failed! ({message})")]
pub struct TransportError {
    pub method: ApiMethod,
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(method: ApiMethod, kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            method,
            kind,
            message: message.into(),
        }
    }

    /// Builds an API error from free-text description. Only used when the client library
    /// does not expose a structured variant for the failure.
    pub fn from_description(method: ApiMethod, description: &str) -> Self {
        let kind = if description.contains(BOT_BLOCKED_DESCRIPTION) {
            TransportErrorKind::BotBlocked
        } else {
            TransportErrorKind::Api
        };
        Self::new(method, kind, description)
    }

    /// True when the Bot API answered with an error (as opposed to being unreachable).
    pub fn is_api(&self) -> bool {
        matches!(
            self.kind,
            TransportErrorKind::BotBlocked | TransportErrorKind::Api
        )
    }
}

/// Top-level error for the bot.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Resolver(#[from] ResolveError),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Failures inside the bot's own handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A spawned handler task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
