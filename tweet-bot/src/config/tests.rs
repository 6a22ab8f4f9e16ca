//! Config tests.

use crate::config::bot_config::BotConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn clear_env() {
    for name in [
        "BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "STATUS_DELETE_DELAY_MS",
        "RESOLVE_TIMEOUT_SECS",
        "RESOLVER_BASE_URL",
        "RESOLVER_USER_AGENT",
    ] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/tweet-bot.log");
    assert_eq!(config.media().status_delete_delay_ms, 3000);
    assert_eq!(config.media().resolve_timeout_secs, 30);
    assert_eq!(config.resolver().base_url(), "https://api.vxtwitter.com");
    assert!(config.validate().is_ok());

    let settings = config.media().handler_settings();
    assert_eq!(settings.status_delete_delay, Duration::from_millis(3000));
    assert_eq!(settings.resolve_timeout, Duration::from_secs(30));
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
    env::set_var("LOG_FILE", "/tmp/bot.log");
    env::set_var("STATUS_DELETE_DELAY_MS", "500");
    env::set_var("RESOLVE_TIMEOUT_SECS", "5");
    env::set_var("RESOLVER_BASE_URL", "http://localhost:9000");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
    assert_eq!(config.log_file(), "/tmp/bot.log");
    assert_eq!(config.media().status_delete_delay_ms, 500);
    assert_eq!(config.media().resolve_timeout_secs, 5);
    assert_eq!(config.resolver().base_url(), "http://localhost:9000");
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
}

#[test]
#[serial]
fn test_load_config_without_token_fails() {
    clear_env();

    let err = BotConfig::load(None).unwrap_err();
    assert!(err.to_string().contains("BOT_TOKEN"));
}

#[test]
#[serial]
fn test_load_config_rejects_bad_numbers() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("STATUS_DELETE_DELAY_MS", "soon");

    assert!(BotConfig::load(None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_invalid_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("RESOLVE_TIMEOUT_SECS", "0");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("RESOLVER_BASE_URL", "nope");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
