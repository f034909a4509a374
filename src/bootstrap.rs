//! Storage initialization from configuration.
//!
//! Handles database connection, cache setup and event sink creation.

use crate::application::services::AliasStorage;
use crate::config::Config;
use crate::infrastructure::cache::{NullCache, RedisCache, TagInvalidator};
use crate::infrastructure::events::BroadcastEventSink;
use crate::infrastructure::negotiation::FixedDomainNegotiator;
use crate::infrastructure::persistence::{self, PgAliasRepository};
use crate::telemetry;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Alias storage backed by PostgreSQL with a configured default domain.
pub type PgAliasStorage = AliasStorage<PgAliasRepository, FixedDomainNegotiator>;

/// A ready-to-use storage and the sink its path events go to.
///
/// Listeners call [`BroadcastEventSink::subscribe`] on `events`.
pub struct Runtime {
    pub storage: PgAliasStorage,
    pub events: BroadcastEventSink,
}

/// Loads `.env`, reads and validates [`Config`], installs tracing and builds
/// the storage.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the database is unreachable.
pub async fn from_env() -> Result<Runtime> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.log_level, &config.log_format);
    config.log_summary();

    build(config).await
}

/// Builds the storage from `config`.
///
/// Initializes:
/// - PostgreSQL connection pool and the alias table
/// - Redis tag invalidation (or NullCache fallback)
/// - Broadcast event sink
///
/// # Errors
///
/// Returns an error if:
/// - `config` fails [`Config::validate`]
/// - Database connection fails
/// - The alias table cannot be created
pub async fn build(config: Config) -> Result<Runtime> {
    config.validate().context("Invalid configuration")?;

    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let cache: Arc<dyn TagInvalidator> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, &config.cache_tag_prefix).await {
            Ok(redis) => {
                tracing::info!("Cache tag invalidation enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache tag invalidation disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let events = BroadcastEventSink::new(config.event_channel_capacity);

    let storage = AliasStorage::new(
        Arc::new(PgAliasRepository::new(Arc::new(pool))),
        Arc::new(FixedDomainNegotiator::new(config.default_domain_id)),
        Arc::new(events.clone()),
        cache,
    );

    storage
        .ensure_schema()
        .await
        .context("Failed to create alias table")?;

    Ok(Runtime { storage, events })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            redis_url: None,
            cache_tag_prefix: "cache_tag:".to_string(),
            default_domain_id: Some(1),
            event_channel_capacity: 1024,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 1,
            db_connect_timeout: 1,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
        }
    }

    #[tokio::test]
    async fn test_build_rejects_zero_event_capacity() {
        let mut config = create_test_config();
        config.event_channel_capacity = 0;

        let err = build(config).await.err().unwrap();

        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[tokio::test]
    async fn test_build_rejects_negative_default_domain() {
        let mut config = create_test_config();
        config.default_domain_id = Some(-1);

        assert!(build(config).await.is_err());
    }
}
