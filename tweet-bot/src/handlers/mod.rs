//! Handlers for the chain (logging, commands, tweets) and the pieces they share.

mod command_handler;
pub mod error_classifier;
mod logging;
pub mod media;
pub mod replies;
pub mod status;
mod tweet_handler;

pub use command_handler::{Command, CommandHandler};
pub use error_classifier::{classify, ErrorClass};
pub use logging::LoggingHandler;
pub use status::{schedule_deletion, StatusCleanup, StatusMessage};
pub use tweet_handler::{
    is_short_link, looks_like_tweet_url, TweetHandler, TweetHandlerSettings,
    DEFAULT_RESOLVE_TIMEOUT,
};
