//! Maps failures from the transport or the resolver to the user-facing outcome.
//!
//! Classification uses [`TransportErrorKind`] and [`ApiMethod`] first. Substring checks remain
//! only for errors whose text comes from an opaque upstream service.

use crate::core::{ApiMethod, DbotError, TransportError, TransportErrorKind};
use crate::core::error::BOT_BLOCKED_DESCRIPTION;

use super::replies;

/// Marker in free-text errors raised by a failed video upload.
const SEND_VIDEO_FAILED: &str = "Call to 'sendVideo' failed";

/// Outcome of classifying a handler failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    /// The recipient blocked the bot: log only, no reply can be delivered.
    BotBlocked,
    /// Telegram could not fetch or send the tweet's video.
    VideoSendFailed,
    /// Any other Bot API error, with its text.
    Transport(String),
    /// Not a Bot API error (resolver, timeout, network), with its text.
    Other(String),
}

impl ErrorClass {
    /// Threaded reply sent by the message handler, None when nothing should be sent.
    pub fn handler_reply(&self) -> Option<String> {
        match self {
            ErrorClass::BotBlocked => None,
            ErrorClass::VideoSendFailed => Some(replies::contacting_twitter_failed_text()),
            ErrorClass::Transport(text) => Some(replies::transport_error_text(text)),
            ErrorClass::Other(text) => Some(replies::resolve_error_text(text)),
        }
    }

    /// Reply sent by the update error boundary: only for Bot API errors other than a blocked bot.
    pub fn boundary_reply(&self) -> Option<String> {
        match self {
            ErrorClass::VideoSendFailed | ErrorClass::Transport(_) => {
                Some(replies::generic_error_text())
            }
            ErrorClass::BotBlocked | ErrorClass::Other(_) => None,
        }
    }
}

fn classify_transport(err: &TransportError) -> ErrorClass {
    if err.kind == TransportErrorKind::BotBlocked || err.message.contains(BOT_BLOCKED_DESCRIPTION) {
        ErrorClass::BotBlocked
    } else if err.method == ApiMethod::SendVideo || err.message.contains(SEND_VIDEO_FAILED) {
        ErrorClass::VideoSendFailed
    } else {
        ErrorClass::Transport(err.to_string())
    }
}

/// Classifies a failure. Only Bot API errors count as transport errors; an unreachable Bot API
/// is treated like any other failure.
pub fn classify(err: &DbotError) -> ErrorClass {
    match err {
        DbotError::Transport(t) if t.is_api() => classify_transport(t),
        other => ErrorClass::Other(other.to_string()),
    }
}
