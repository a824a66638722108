//! Short-link lookup cache.
//!
//! [`CacheService`] is the seam; [`RedisCache`] backs it in production
//! and [`NullCache`] stands in when Redis is unconfigured or down.

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
