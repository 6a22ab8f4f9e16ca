//! Telegram layer: adapters, Bot implementation, update error boundary, dispatcher runner.

mod adapters;
mod bot_adapter;
mod error_boundary;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{transport_error, TelegramBotAdapter};
pub use error_boundary::handle_update_error;
pub use runner::{fetch_bot_username, process_update, register_commands, run_dispatcher};
