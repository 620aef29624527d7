use std::time::Duration;

use thiserror::Error;

use crate::constants::{DAILYMOTION_API_BASE, DEFAULT_USER_AGENT, VIMEO_API_BASE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Settings for the HTTP client behind thumbnail lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Vimeo metadata endpoint, without trailing `/{id}.json`.
    pub vimeo_api_base: String,
    /// Dailymotion metadata endpoint, without trailing `/{id}`.
    pub dailymotion_api_base: String,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            vimeo_api_base: VIMEO_API_BASE.to_string(),
            dailymotion_api_base: DAILYMOTION_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to the
    /// public endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = parse_env_u64("VIDEO_EMBED_HTTP_TIMEOUT_SECS", 0)?;

        Ok(Self {
            vimeo_api_base: env_or_default("VIDEO_EMBED_VIMEO_API_BASE", VIMEO_API_BASE),
            dailymotion_api_base: env_or_default(
                "VIDEO_EMBED_DAILYMOTION_API_BASE",
                DAILYMOTION_API_BASE,
            ),
            user_agent: env_or_default("VIDEO_EMBED_USER_AGENT", DEFAULT_USER_AGENT),
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base("VIDEO_EMBED_VIMEO_API_BASE", &self.vimeo_api_base)?;
        validate_base(
            "VIDEO_EMBED_DAILYMOTION_API_BASE",
            &self.dailymotion_api_base,
        )?;
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue {
                name: "VIDEO_EMBED_HTTP_TIMEOUT_SECS".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_base(name: &str, value: &str) -> Result<(), ConfigError> {
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: e.to_string(),
        }),
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
