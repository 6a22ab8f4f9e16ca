//! Timing of the tweet handler: status message lifetime and resolver timeout.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::handlers::TweetHandlerSettings;

/// STATUS_DELETE_DELAY_MS and RESOLVE_TIMEOUT_SECS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaConfig {
    pub status_delete_delay_ms: u64,
    pub resolve_timeout_secs: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            status_delete_delay_ms: 3000,
            resolve_timeout_secs: 30,
        }
    }
}

fn parse_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got {:?}", name, value)),
        _ => Ok(default),
    }
}

impl MediaConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            status_delete_delay_ms: parse_var(
                "STATUS_DELETE_DELAY_MS",
                defaults.status_delete_delay_ms,
            )?,
            resolve_timeout_secs: parse_var("RESOLVE_TIMEOUT_SECS", defaults.resolve_timeout_secs)?,
        })
    }

    /// A zero timeout would fail every resolution.
    pub fn validate(&self) -> Result<()> {
        if self.resolve_timeout_secs == 0 {
            anyhow::bail!("RESOLVE_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn handler_settings(&self) -> TweetHandlerSettings {
        TweetHandlerSettings {
            status_delete_delay: Duration::from_millis(self.status_delete_delay_ms),
            resolve_timeout: Duration::from_secs(self.resolve_timeout_secs),
        }
    }
}
