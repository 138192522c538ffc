use std::fmt::Display;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Recommendations(String),
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Recommendations(title) => write!(f, "rec:{}", title),
        }
    }
}

/// Store for cached recommendation lists.
///
/// Values are ordered title sequences; order reflects descending similarity
/// rank and must survive a put/get round-trip exactly. Implementations keep
/// decode failures distinct from misses: a corrupt stored payload is an
/// error, never `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationCache: Send + Sync {
    /// Cached recommendations for the key, if present and unexpired
    async fn get(&self, key: &CacheKey) -> AppResult<Option<Vec<String>>>;

    /// Stores an ordered recommendation list under the key, replacing any
    /// prior value, expiring after `ttl_secs`
    async fn put(&self, key: &CacheKey, recommendations: &[String], ttl_secs: u64)
        -> AppResult<()>;
}
