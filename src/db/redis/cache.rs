use redis::AsyncCommands;
use redis::Client;

use crate::db::cache::{CacheKey, RecommendationCache};
use crate::error::{AppError, AppResult};

/// Creates a Redis client for caching
///
/// Establishes a connection to Redis for recommendation caching.
/// Uses connection pooling via the connection-manager feature.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Redis-backed recommendation cache.
///
/// Values are stored as JSON string arrays so entries stay decodable across
/// implementations and versions. Writes use SETEX, so value and expiry land
/// atomically and Redis handles eviction after the TTL.
#[derive(Clone)]
pub struct RedisCache {
    redis_client: Client,
}

impl RedisCache {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }
}

#[async_trait::async_trait]
impl RecommendationCache for RedisCache {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<Vec<String>>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let cached: Option<String> = conn.get(key.to_string()).await?;

        match cached {
            Some(payload) => {
                let recommendations =
                    serde_json::from_str(&payload).map_err(AppError::CacheDecode)?;
                Ok(Some(recommendations))
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        key: &CacheKey,
        recommendations: &[String],
        ttl_secs: u64,
    ) -> AppResult<()> {
        let payload = serde_json::to_string(recommendations).map_err(AppError::CacheEncode)?;

        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key.to_string(), payload, ttl_secs).await?;

        tracing::debug!(key = %key, ttl = ttl_secs, "Cached recommendations");

        Ok(())
    }
}
