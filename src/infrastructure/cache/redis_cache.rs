//! Redis-backed [`CacheService`].

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

const KEY_PREFIX: &str = "shortlink:";

/// Short-link cache on a shared [`ConnectionManager`], which multiplexes
/// requests and reconnects on its own. Entries live under the
/// `shortlink:` key namespace. Once connected, every operation fails
/// open.
pub struct RedisCache {
    connection: ConnectionManager,
    default_ttl: usize,
}

impl RedisCache {
    /// Opens the connection and proves it with a PING before use.
    /// `default_ttl_seconds` applies to entries stored without an
    /// explicit TTL (the `CACHE_TTL_SECONDS` setting).
    ///
    /// # Errors
    ///
    /// [`CacheError::Connection`] when the URL does not parse, the
    /// connection fails, or the PING goes unanswered. The caller decides
    /// whether that is fatal; the server falls back to
    /// [`super::NullCache`].
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        connection
            .clone()
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            connection,
            default_ttl: default_ttl_seconds as usize,
        })
    }

    fn key(token: &str) -> String {
        format!("{KEY_PREFIX}{token}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_recipe_id(&self, token: &str) -> CacheResult<Option<i64>> {
        let mut conn = self.connection.clone();

        match conn.get::<_, Option<i64>>(Self::key(token)).await {
            Ok(Some(recipe_id)) => {
                debug!("Cache HIT: {} -> recipe {}", token, recipe_id);
                Ok(Some(recipe_id))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", token);
                Ok(None)
            }
            Err(e) => {
                // A broken cache reads as a miss.
                error!("Redis GET error for {}: {}", token, e);
                Ok(None)
            }
        }
    }

    async fn set_recipe_id(
        &self,
        token: &str,
        recipe_id: i64,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()> {
        let mut conn = self.connection.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl) as u64;

        match conn.set_ex::<_, _, ()>(Self::key(token), recipe_id, ttl).await {
            Ok(()) => debug!("Cache SET: {} -> recipe {} (TTL: {}s)", token, recipe_id, ttl),
            Err(e) => warn!("Redis SET error for {}: {}", token, e),
        }

        Ok(())
    }

    async fn invalidate(&self, token: &str) -> CacheResult<()> {
        let mut conn = self.connection.clone();

        match conn.del::<_, i32>(Self::key(token)).await {
            Ok(deleted) if deleted > 0 => debug!("Cache INVALIDATE: {}", token),
            Ok(_) => {}
            Err(e) => warn!("Redis DEL error for {}: {}", token, e),
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.connection.clone().ping::<()>().await.is_ok()
    }
}
