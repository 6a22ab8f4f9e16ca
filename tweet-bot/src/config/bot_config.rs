//! BotConfig: BaseConfig + MediaConfig + resolver config. Use load() for env-based loading.

use anyhow::Result;
use tweet_resolver::{EnvResolverConfig, ResolverConfig};

use super::{BaseConfig, MediaConfig};

/// Bot config. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub media: MediaConfig,
    pub resolver: EnvResolverConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let media = MediaConfig::from_env()?;
        let resolver = EnvResolverConfig::from_env()?;
        Ok(Self {
            base,
            media,
            resolver,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.media.validate()?;
        self.resolver.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn media(&self) -> &MediaConfig {
        &self.media
    }
    pub fn resolver(&self) -> &dyn ResolverConfig {
        &self.resolver
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
