//! # tweet-bot
//!
//! Telegram bot that answers tweet links with the tweet's image or video.
//!
//! Layout: [`core`] (transport-agnostic types and the `Bot` trait), [`chain`] (handler chain),
//! [`handlers`] (logging, commands, tweets), [`telegram`] (teloxide adapter and dispatcher),
//! [`config`] and [`runner`] (assembly).

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, MediaConfig};
pub use self::core::{
    init_tracing, parse_message_id, ApiMethod, Bot, Chat, DbotError, Handler, HandlerError,
    HandlerResponse, Message, Result, ToCoreMessage, ToCoreUser, TransportError,
    TransportErrorKind, User,
};
pub use handlers::{
    CommandHandler, ErrorClass, LoggingHandler, StatusCleanup, StatusMessage, TweetHandler,
    TweetHandlerSettings,
};
pub use runner::{build_bot_components, build_handler_chain, run_bot, BotComponents};
pub use telegram::{
    fetch_bot_username, handle_update_error, process_update, register_commands, run_dispatcher,
    TelegramBotAdapter,
    TelegramMessageWrapper, TelegramUserWrapper,
};
