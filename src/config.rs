//! Storage configuration loaded from environment variables.
//!
//! ## Required
//!
//! - `DATABASE_URL` - PostgreSQL connection string holding the `domain_path` table
//!
//! ## Optional
//!
//! - `REDIS_URL` - Redis connection for `route_match` tag invalidation (disabled if unset)
//! - `CACHE_TAG_PREFIX` - Key prefix for tag counters (default: `cache_tag:`)
//! - `DEFAULT_DOMAIN_ID` - Domain used when a save sets none
//! - `EVENT_CHANNEL_CAPACITY` - Path event buffer per listener (default: 1024, 16..=1000000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME` - pool settings

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

const DEFAULT_TAG_PREFIX: &str = "cache_tag:";
const DEFAULT_EVENT_CAPACITY: usize = 1024;
const EVENT_CAPACITY_RANGE: std::ops::RangeInclusive<usize> = 16..=1_000_000;

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub cache_tag_prefix: String,
    /// Domain reported by the fixed negotiator. `None` leaves domain
    /// selection entirely to callers.
    pub default_domain_id: Option<i32>,
    pub event_channel_capacity: usize,
    pub log_level: String,
    pub log_format: String,

    /// `DB_MAX_CONNECTIONS`, default 10.
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection (`DB_CONNECT_TIMEOUT`, default 30).
    pub db_connect_timeout: u64,
    /// `DB_IDLE_TIMEOUT` in seconds, default 600.
    pub db_idle_timeout: u64,
    /// `DB_MAX_LIFETIME` in seconds, default 1800.
    pub db_max_lifetime: u64,
}

/// Reads `name` and parses it, `None` when the variable is unset or blank.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value '{raw}'")),
        _ => Ok(None),
    }
}

fn string_var(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Config {
    /// Loads configuration from environment variables. Expects `.env` to be
    /// loaded already; call [`Config::validate`] before use.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric variable
    /// does not parse.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            database_url,
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            cache_tag_prefix: string_var("CACHE_TAG_PREFIX", DEFAULT_TAG_PREFIX),
            default_domain_id: parse_var("DEFAULT_DOMAIN_ID")?,
            event_channel_capacity: parse_var("EVENT_CHANNEL_CAPACITY")?
                .unwrap_or(DEFAULT_EVENT_CAPACITY),
            log_level: string_var("RUST_LOG", "info"),
            log_format: string_var("LOG_FORMAT", "text"),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(10),
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT")?.unwrap_or(30),
            db_idle_timeout: parse_var("DB_IDLE_TIMEOUT")?.unwrap_or(600),
            db_max_lifetime: parse_var("DB_MAX_LIFETIME")?.unwrap_or(1800),
        })
    }

    /// Checks values that would make the storage unusable.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending variable.
    pub fn validate(&self) -> Result<()> {
        if !EVENT_CAPACITY_RANGE.contains(&self.event_channel_capacity) {
            anyhow::bail!(
                "EVENT_CHANNEL_CAPACITY must be within {}..={}, got {}",
                EVENT_CAPACITY_RANGE.start(),
                EVENT_CAPACITY_RANGE.end(),
                self.event_channel_capacity
            );
        }

        if !matches!(self.log_format.as_str(), "text" | "json") {
            anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", self.log_format);
        }

        if !(self.database_url.starts_with("postgres://")
            || self.database_url.starts_with("postgresql://"))
        {
            anyhow::bail!("DATABASE_URL must use the postgres:// or postgresql:// scheme");
        }

        if let Some(url) = &self.redis_url
            && !(url.starts_with("redis://") || url.starts_with("rediss://"))
        {
            anyhow::bail!("REDIS_URL must use the redis:// or rediss:// scheme");
        }

        if self.cache_tag_prefix.is_empty() {
            anyhow::bail!("CACHE_TAG_PREFIX must not be empty");
        }

        if self.default_domain_id.is_some_and(|id| id < 0) {
            anyhow::bail!("DEFAULT_DOMAIN_ID must not be negative");
        }

        if self.db_max_connections == 0 || self.db_connect_timeout == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS and DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Logs the non-secret settings.
    pub fn log_summary(&self) {
        tracing::info!(
            redis = self.redis_url.is_some(),
            tag_prefix = %self.cache_tag_prefix,
            default_domain = ?self.default_domain_id,
            event_capacity = self.event_channel_capacity,
            max_connections = self.db_max_connections,
            "Configuration loaded"
        );
    }
}
