//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// One inbound text message. Built per update; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport message id (Telegram numeric id as string).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
