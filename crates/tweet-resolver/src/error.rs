//! Resolver errors.

use std::time::Duration;
use thiserror::Error;

/// Failure to turn a tweet link into media metadata.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no tweet link found in: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("resolver returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid resolver response: {0}")]
    Decode(String),

    #[error("resolver did not answer within {0:?}")]
    Timeout(Duration),
}
