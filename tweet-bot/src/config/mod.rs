//! Bot configuration: BaseConfig (Telegram + log) + MediaConfig (timings) + resolver config.

mod base;
mod bot_config;
mod media;

#[cfg(test)]
mod tests;

pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use media::MediaConfig;
