//! Start-up configuration read from the environment (and an optional `.env`).

use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_BACKOFF_MS: u64 = 1000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        source: url::ParseError,
    },
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub retry_attempts: u32,
    pub retry_backoff: Duration,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let api_base_url = match value("NBA_API_BASE_URL") {
            Some(raw) => parse_base_url(&raw).map_err(|source| ConfigError::InvalidUrl {
                key: "NBA_API_BASE_URL",
                source,
            })?,
            None => defaults.api_base_url,
        };

        let request_timeout = value("NBA_API_TIMEOUT_SECS")
            .map(|raw| parse_u64("NBA_API_TIMEOUT_SECS", raw).map(Duration::from_secs))
            .transpose()?
            .unwrap_or(defaults.request_timeout);
        let cache_ttl = value("IMPACT_CACHE_TTL_SECS")
            .map(|raw| parse_u64("IMPACT_CACHE_TTL_SECS", raw).map(Duration::from_secs))
            .transpose()?
            .unwrap_or(defaults.cache_ttl);
        let retry_attempts = value("IMPACT_RETRY_ATTEMPTS")
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
                    key: "IMPACT_RETRY_ATTEMPTS",
                    value: raw,
                })
            })
            .transpose()?
            .unwrap_or(defaults.retry_attempts);
        let retry_backoff = value("IMPACT_RETRY_BACKOFF_MS")
            .map(|raw| parse_u64("IMPACT_RETRY_BACKOFF_MS", raw).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(defaults.retry_backoff);
        let log_level = value("PLAYER_IMPACT_LOG").unwrap_or(defaults.log_level);

        Ok(Self {
            api_base_url,
            request_timeout,
            cache_ttl,
            retry_attempts,
            retry_backoff,
            log_level,
        })
    }
}

/// `Url::join` drops the last path segment unless the base ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}

fn parse_u64(key: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}
