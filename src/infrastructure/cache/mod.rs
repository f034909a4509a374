//! Cache tag invalidation for route resolution caches.
//!
//! Provides a [`TagInvalidator`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed tag counters
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, ROUTE_MATCH_TAG, TagInvalidator};

#[cfg(test)]
pub use service::MockTagInvalidator;
