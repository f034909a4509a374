//! Cache tag invalidation trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Tag used by route resolution caches; invalidated after every alias write.
pub const ROUTE_MATCH_TAG: &str = "route_match";

/// Invalidates cached computations by tag.
///
/// Tags are invalidation counters: invalidating a tag bumps its counter, and
/// readers treat an item cached under an older counter value as stale.
///
/// Implementations must be thread-safe and fail open: cache trouble must not
/// fail the write that triggered the invalidation.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed counters
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagInvalidator: Send + Sync {
    /// Marks every item cached under `tag` as stale.
    ///
    /// # Errors
    ///
    /// Should not propagate backend errors to callers.
    async fn invalidate_tag(&self, tag: &str) -> CacheResult<()>;
}
