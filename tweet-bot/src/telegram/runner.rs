//! Dispatcher runner: each text message becomes a core::Message and runs through the HandlerChain in
//! its own task. Fills the bot_username cache via get_me and registers the command menu first.

use crate::chain::HandlerChain;
use crate::core::{ApiMethod, Bot as CoreBot, Message as CoreMessage, ToCoreMessage, TransportError};
use crate::handlers::Command;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::transport_error;
use super::error_boundary::handle_update_error;

/// Runs `chain` for one message and sends failures to the error boundary. Logs the response time.
pub async fn process_update(
    chain: HandlerChain,
    bot: Arc<dyn CoreBot>,
    update_id: u32,
    message: CoreMessage,
) {
    let started = Instant::now();
    if let Err(e) = chain.handle(&message).await {
        handle_update_error(bot.as_ref(), update_id, &message, &e).await;
    }
    info!(
        update_id = update_id,
        user_id = message.user.id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Response time"
    );
}

async fn on_message(
    upd: Update,
    msg: teloxide::types::Message,
    chain: HandlerChain,
    core_bot: Arc<dyn CoreBot>,
) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    if msg.text().is_none() {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Ignoring non-text message"
        );
        return Ok(());
    }

    tokio::spawn(process_update(chain, core_bot, upd.id.0, core_msg));
    Ok(())
}

/// Calls getMe and stores the bot's username in `bot_username`. Returns the username, if any.
pub async fn fetch_bot_username(
    bot: &teloxide::Bot,
    bot_username: &tokio::sync::RwLock<Option<String>>,
) -> std::result::Result<Option<String>, TransportError> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| transport_error(ApiMethod::GetMe, e))?;
    let username = me.user.username.clone();
    if let Some(username) = &username {
        *bot_username.write().await = Some(username.clone());
        info!(username = %username, "Bot username set");
    }
    Ok(username)
}

/// Registers /start and /help in the bot's command menu.
pub async fn register_commands(bot: &teloxide::Bot) -> std::result::Result<(), TransportError> {
    bot.set_my_commands(Command::bot_commands())
        .await
        .map_err(|e| transport_error(ApiMethod::SetMyCommands, e))?;
    Ok(())
}

/// Starts the dispatcher with the given teloxide Bot, HandlerChain, core Bot and bot_username cache.
/// Returns after Ctrl-C.
#[instrument(skip(bot, handler_chain, core_bot, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    core_bot: Arc<dyn CoreBot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    if let Err(e) = fetch_bot_username(&bot, &bot_username).await {
        warn!(error = %e, "get_me failed, commands addressed as /cmd@bot will not match");
    }

    if let Err(e) = register_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let handler = Update::filter_message().endpoint(on_message);

    info!("Bot started");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain, core_bot])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");
    Ok(())
}
