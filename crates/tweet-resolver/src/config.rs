//! Resolver configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Public vxtwitter API; any service with the same JSON shape works.
pub const DEFAULT_RESOLVER_BASE_URL: &str = "https://api.vxtwitter.com";

/// Resolver configuration interface.
pub trait ResolverConfig: Send + Sync {
    fn base_url(&self) -> &str;
    fn user_agent(&self) -> Option<&str>;
}

/// Resolver config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvResolverConfig {
    pub resolver_base_url: String,
    pub resolver_user_agent: Option<String>,
}

impl ResolverConfig for EnvResolverConfig {
    fn base_url(&self) -> &str {
        &self.resolver_base_url
    }
    fn user_agent(&self) -> Option<&str> {
        self.resolver_user_agent.as_deref()
    }
}

impl EnvResolverConfig {
    /// Loads RESOLVER_BASE_URL (default [`DEFAULT_RESOLVER_BASE_URL`]) and RESOLVER_USER_AGENT (optional).
    pub fn from_env() -> Result<Self> {
        let resolver_base_url = env::var("RESOLVER_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESOLVER_BASE_URL.to_string());
        let resolver_user_agent = env::var("RESOLVER_USER_AGENT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            resolver_base_url,
            resolver_user_agent,
        })
    }

    /// Base URL must parse as an absolute URL.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.resolver_base_url).is_err() {
            anyhow::bail!(
                "RESOLVER_BASE_URL is not a valid URL: {}",
                self.resolver_base_url
            );
        }
        Ok(())
    }
}
