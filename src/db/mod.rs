pub mod cache;
pub mod postgres;
pub mod redis;

pub use cache::CacheKey;
pub use cache::RecommendationCache;
pub use postgres::create_pool;
pub use redis::create_redis_client;
pub use redis::RedisCache;
