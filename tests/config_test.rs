//! Integration tests for environment-based configuration.

use std::time::Duration;

use serial_test::serial;
use video_embed::{ClientConfig, ConfigError, EmbedClient};

const VARS: [&str; 4] = [
    "VIDEO_EMBED_VIMEO_API_BASE",
    "VIDEO_EMBED_DAILYMOTION_API_BASE",
    "VIDEO_EMBED_USER_AGENT",
    "VIDEO_EMBED_HTTP_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("VIDEO_EMBED_VIMEO_API_BASE", "http://localhost:8080/vimeo");
    std::env::set_var("VIDEO_EMBED_DAILYMOTION_API_BASE", "http://localhost:8080/dm");
    std::env::set_var("VIDEO_EMBED_USER_AGENT", "test-agent/1.0");
    std::env::set_var("VIDEO_EMBED_HTTP_TIMEOUT_SECS", "15");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.vimeo_api_base, "http://localhost:8080/vimeo");
    assert_eq!(config.dailymotion_api_base, "http://localhost:8080/dm");
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert!(config.validate().is_ok());
    assert!(EmbedClient::new(config).is_ok());
}

#[test]
#[serial]
fn test_from_env_bad_timeout() {
    clear_env();
    std::env::set_var("VIDEO_EMBED_HTTP_TIMEOUT_SECS", "soon");

    let result = ClientConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
}

#[test]
#[serial]
fn test_empty_values_use_defaults() {
    clear_env();
    std::env::set_var("VIDEO_EMBED_VIMEO_API_BASE", "");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.vimeo_api_base, "https://vimeo.com/api/v2/video");
}
