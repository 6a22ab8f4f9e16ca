//! Mock implementation of [`tweet_bot::Bot`] that records every call.
//!
//! Calls can be made to fail per kind with a given [`TransportError`].

use async_trait::async_trait;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use tweet_bot::{Bot, Chat, Message, Result, TransportError};

/// Which Bot method was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    SendMessage,
    ReplyTo,
    SendStatus,
    DeleteMessage,
    SendPhoto,
    SendVideo,
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct BotCall {
    pub kind: CallKind,
    pub chat_id: i64,
    /// Replied-to message id for `ReplyTo`, returned id for `SendStatus`, deleted id for `DeleteMessage`.
    pub message_id: Option<String>,
    /// Message text, or the media URL for photos and videos.
    pub text: String,
    pub caption: Option<String>,
}

/// Mock Bot: records calls and returns ids starting at 1000 from `send_message_and_return_id`.
#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    failures: Mutex<Vec<(CallKind, TransportError)>>,
    next_id: AtomicI32,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI32::new(1000),
            ..Default::default()
        })
    }

    /// Makes every later call of `kind` fail with `err`.
    pub fn fail_on(&self, kind: CallKind, err: TransportError) {
        self.failures.lock().unwrap().push((kind, err));
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_of(&self, kind: CallKind) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.kind == kind)
            .collect()
    }

    fn record(
        &self,
        kind: CallKind,
        chat_id: i64,
        message_id: Option<String>,
        text: &str,
        caption: Option<&str>,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall {
            kind,
            chat_id,
            message_id,
            text: text.to_string(),
            caption: caption.map(str::to_string),
        });
        let failures = self.failures.lock().unwrap();
        match failures.iter().find(|(k, _)| *k == kind) {
            Some((_, err)) => Err(err.clone().into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(CallKind::SendMessage, chat.id, None, text, None)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(
            CallKind::ReplyTo,
            message.chat.id,
            Some(message.id.clone()),
            text,
            None,
        )
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.record(CallKind::SendStatus, chat.id, Some(id.clone()), text, None)?;
        Ok(id)
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        self.record(
            CallKind::DeleteMessage,
            chat.id,
            Some(message_id.to_string()),
            "",
            None,
        )
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: Option<&str>) -> Result<()> {
        self.record(CallKind::SendPhoto, chat.id, None, photo_url, caption)
    }

    async fn send_video(&self, chat: &Chat, video_url: &str, caption: Option<&str>) -> Result<()> {
        self.record(CallKind::SendVideo, chat.id, None, video_url, caption)
    }
}
