//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, TagInvalidator};
use async_trait::async_trait;
use tracing::debug;

/// A tag invalidator that does nothing.
///
/// Used when Redis is not configured or unreachable at startup.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (tag invalidation disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagInvalidator for NullCache {
    async fn invalidate_tag(&self, _tag: &str) -> CacheResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_is_inert() {
        let cache = NullCache::new();

        assert!(cache.invalidate_tag("route_match").await.is_ok());
        assert!(cache.invalidate_tag("").await.is_ok());
    }
}
