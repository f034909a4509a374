//! Redis-backed cache tag invalidation.

use super::service::{CacheError, CacheResult, TagInvalidator};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Cache tag counters stored in Redis.
///
/// Each tag is an integer key `{prefix}{tag}` incremented on invalidation.
/// Uses `ConnectionManager` for connection reuse. Invalidation is fail-open:
/// errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

/// Redis key holding the invalidation counter of `tag`.
fn tag_key(prefix: &str, tag: &str) -> String {
    format!("{prefix}{tag}")
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace for tag counter keys; controlled via `CACHE_TAG_PREFIX`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Invalid Redis URL: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut conn = manager.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!(key_prefix, "Connected to Redis for tag invalidation");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
        })
    }
}

#[async_trait]
impl TagInvalidator for RedisCache {
    async fn invalidate_tag(&self, tag: &str) -> CacheResult<()> {
        let key = tag_key(&self.key_prefix, tag);
        let mut conn = self.client.clone();

        match conn.incr::<_, _, u64>(&key, 1).await {
            Ok(counter) => debug!(tag, counter, "Cache tag invalidated"),
            Err(e) => warn!(tag, error = %e, "Redis INCR failed; tag left as is"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_key_is_prefixed() {
        assert_eq!(tag_key("cache_tag:", "route_match"), "cache_tag:route_match");
        assert_eq!(tag_key("site_b:", "route_match"), "site_b:route_match");
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisCache::connect("not a redis url", "cache_tag:").await;

        assert!(matches!(result, Err(CacheError::Connection(_))));
    }
}
