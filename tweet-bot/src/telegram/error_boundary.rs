//! Last resort for failures escaping the handler chain. Never panics and never stops the bot.

use tracing::{error, info, warn};

use crate::core::{Bot, DbotError, Message};
use crate::handlers::{classify, ErrorClass};

/// Logs a failed update and, for Bot API errors other than a blocked bot, tells the user.
pub async fn handle_update_error(bot: &dyn Bot, update_id: u32, message: &Message, err: &DbotError) {
    error!(
        update_id = update_id,
        user_id = message.user.id,
        message_content = %message.content,
        error = %err,
        "Error while handling update"
    );

    let class = classify(err);
    match class.boundary_reply() {
        Some(text) => {
            if let Err(e) = bot.send_message(&message.chat, &text).await {
                warn!(error = %e, update_id = update_id, "Failed to report error to user");
            }
        }
        None if class == ErrorClass::BotBlocked => {
            info!(update_id = update_id, user_id = message.user.id, "Bot blocked by user");
        }
        None => {
            warn!(update_id = update_id, "Unknown error, not reported to user");
        }
    }
}
