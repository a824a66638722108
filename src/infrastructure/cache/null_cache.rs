//! No-op cache for deployments without Redis.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// Cache that stores nothing and always misses.
///
/// Stands in for [`super::RedisCache`] when `REDIS_URL` is unset or the
/// connection fails at startup; every redirect then goes to the
/// database.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_recipe_id(&self, _token: &str) -> CacheResult<Option<i64>> {
        Ok(None)
    }

    async fn set_recipe_id(
        &self,
        _token: &str,
        _recipe_id: i64,
        _ttl: Option<usize>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _token: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
