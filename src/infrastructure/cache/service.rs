//! Caching seam for short-link resolution.

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by cache backends.
///
/// Only the initial connection surfaces these to callers; the data-path
/// methods fail open instead.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation error: {0}")]
    Operation(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Cache for the token-to-recipe mapping behind `/s/{token}` redirects.
///
/// Redirects are read-heavy while the mapping never changes after
/// creation, which makes it the one lookup worth caching. Backends fail
/// open: a broken cache means every lookup falls through to the
/// database, never a failed request.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the recipe id for a short-link token. `Ok(None)` covers
    /// both a genuine miss and a backend error, which callers treat the
    /// same way.
    async fn get_recipe_id(&self, token: &str) -> CacheResult<Option<i64>>;

    /// Stores a token-to-recipe mapping. A `ttl_seconds` of `None`
    /// applies the backend's configured default.
    async fn set_recipe_id(
        &self,
        token: &str,
        recipe_id: i64,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()>;

    /// Drops a cached mapping after its recipe is deleted, so the stale
    /// token stops redirecting before the TTL would expire it.
    async fn invalidate(&self, token: &str) -> CacheResult<()>;

    /// True when the backend answers a liveness probe.
    async fn health_check(&self) -> bool;
}
