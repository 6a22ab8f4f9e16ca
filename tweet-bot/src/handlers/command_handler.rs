//! `/start` and `/help`.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};

use super::replies;

/// Commands the bot understands; everything else goes to the tweet handler.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start the bot.")]
    Start,
    #[command(description = "show what this bot does.")]
    Help,
}

/// Answers bot commands with fixed texts. Delivery failures are logged and swallowed.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot, bot_username }
    }

    /// Parses `text` as a command addressed to this bot (`/help` or `/help@<bot>`).
    pub async fn parse_command(&self, text: &str) -> Option<Command> {
        let username = self.bot_username.read().await.clone().unwrap_or_default();
        Command::parse(text, &username).ok()
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = self.parse_command(&message.content).await else {
            return Ok(HandlerResponse::Continue);
        };

        let text = match command {
            Command::Start => replies::welcome_text(),
            Command::Help => replies::help_text(),
        };

        match self.bot.send_message(&message.chat, &text).await {
            Ok(()) => match command {
                Command::Start => info!(
                    user_id = message.user.id,
                    name = %message.user.display_name(),
                    "New user added"
                ),
                Command::Help => info!(
                    user_id = message.user.id,
                    name = %message.user.display_name(),
                    "Help command sent to"
                ),
            },
            Err(e) => error!(
                error = %e,
                command = ?command,
                user_id = message.user.id,
                "Failed to send command reply"
            ),
        }

        Ok(HandlerResponse::Stop)
    }
}
