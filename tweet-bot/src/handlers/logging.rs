//! Logs each inbound message before the chain handles it.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Logs the sender and text in before() and the outcome in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            "From: {} (@{}) ID: {}",
            message.user.display_name(),
            message.user.username.as_deref().unwrap_or("unknown"),
            message.user.id
        );
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            sent_at = %message.created_at,
            message_content = %message.content,
            "Message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
