//! Transient "Downloading" status message and its scheduled deletion.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::core::{Bot, Chat, HandlerError, Result};

/// Default delay before the status message is deleted.
pub const DEFAULT_STATUS_DELETE_DELAY: Duration = Duration::from_millis(3000);

/// A status message the bot sent and will delete.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub chat: Chat,
    pub message_id: String,
}

/// Handle to a scheduled deletion. Dropping it leaves the deletion running.
#[derive(Debug)]
pub struct StatusCleanup {
    handle: JoinHandle<Result<()>>,
}

impl StatusCleanup {
    /// Cancels the deletion if it has not run yet.
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the deletion and returns its result.
    pub async fn wait(self) -> Result<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(HandlerError::Task(e.to_string()).into()),
        }
    }
}

/// Deletes `status` once after `delay`, independently of the caller. A failed deletion is logged
/// and not retried.
pub fn schedule_deletion(bot: Arc<dyn Bot>, status: StatusMessage, delay: Duration) -> StatusCleanup {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match bot.delete_message(&status.chat, &status.message_id).await {
            Ok(()) => {
                debug!(
                    chat_id = status.chat.id,
                    message_id = %status.message_id,
                    "Status message deleted"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    chat_id = status.chat.id,
                    message_id = %status.message_id,
                    "Failed to delete status message"
                );
                Err(e)
            }
        }
    });
    StatusCleanup { handle }
}
