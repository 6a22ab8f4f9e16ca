//! Assembles the bot from config and runs it.

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, instrument};
use tweet_resolver::{HttpTweetResolver, TweetResolver};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::handlers::{CommandHandler, LoggingHandler, TweetHandler, TweetHandlerSettings};
use crate::telegram::{run_dispatcher, TelegramBotAdapter};

/// Dependencies shared by the handlers and the dispatcher.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub resolver: Arc<dyn TweetResolver>,
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    pub settings: TweetHandlerSettings,
}

/// Builds BotComponents from config: teloxide bot (with optional API URL), adapter and HTTP resolver.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.bot_token());
        match config.telegram_api_url() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    };

    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let resolver: Arc<dyn TweetResolver> = Arc::new(
        HttpTweetResolver::from_config(config.resolver())
            .map_err(|e| anyhow::anyhow!("Failed to build tweet resolver: {}", e))?,
    );

    Ok(BotComponents {
        teloxide_bot,
        bot,
        resolver,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
        settings: config.media().handler_settings(),
    })
}

/// Builds the handler chain (logging → commands → tweets).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            components.bot.clone(),
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(TweetHandler::with_settings(
            components.bot.clone(),
            components.resolver.clone(),
            components.settings,
        )))
}

/// Main entry: validate config, init logging, build components and chain, then run the dispatcher.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        resolver_base_url = %config.resolver().base_url(),
        status_delete_delay_ms = config.media().status_delete_delay_ms,
        resolve_timeout_secs = config.media().resolve_timeout_secs,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(&components);

    run_dispatcher(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot.clone(),
        components.bot_username.clone(),
    )
    .await
}
