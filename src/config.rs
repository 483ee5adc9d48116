use std::{path::PathBuf, str::FromStr};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SNAPSHOT_PATH: &str = "queue.json";
const DEFAULT_POLL_INTERVAL_HOURS: u32 = 1;
const DEFAULT_STEAM_HTTP_TIMEOUT_SECS: u64 = 15;

pub struct Config {
    pub database_url: String,
    pub discord_token: String,
    pub steam_api_key: Option<String>,

    /// File the notification queue is snapshotted to for crash recovery.
    pub queue_snapshot_path: PathBuf,

    pub news_poll_interval_hours: u32,
    pub price_poll_interval_hours: u32,
    pub workshop_poll_interval_hours: u32,
    pub ugc_poll_interval_hours: u32,

    pub steam_http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_token: required("DISCORD_TOKEN")?,
            steam_api_key: std::env::var("STEAM_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            queue_snapshot_path: std::env::var("QUEUE_SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            news_poll_interval_hours: parsed_or(
                "NEWS_POLL_INTERVAL_HOURS",
                DEFAULT_POLL_INTERVAL_HOURS,
            )?,
            price_poll_interval_hours: parsed_or(
                "PRICE_POLL_INTERVAL_HOURS",
                DEFAULT_POLL_INTERVAL_HOURS,
            )?,
            workshop_poll_interval_hours: parsed_or(
                "WORKSHOP_POLL_INTERVAL_HOURS",
                DEFAULT_POLL_INTERVAL_HOURS,
            )?,
            ugc_poll_interval_hours: parsed_or(
                "UGC_POLL_INTERVAL_HOURS",
                DEFAULT_POLL_INTERVAL_HOURS,
            )?,
            steam_http_timeout_secs: parsed_or(
                "STEAM_HTTP_TIMEOUT_SECS",
                DEFAULT_STEAM_HTTP_TIMEOUT_SECS,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional environment variable, falling back to `default` when unset.
///
/// A value that is set but fails to parse is an error rather than silently ignored.
fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
