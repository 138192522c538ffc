use std::sync::Arc;

use crate::db::{CacheKey, RecommendationCache};
use crate::error::{AppError, AppResult};
use crate::models::{Catalog, SimilarityMatrix};

/// Number of recommendations returned per title
const TOP_N: usize = 5;

/// Cache entry lifetime: 24 hours
const CACHE_TTL_SECS: u64 = 86_400;

/// Cache-aside recommendation lookup.
///
/// Checks the cache before computing, recomputes from the similarity matrix
/// on a miss and writes the result back with a 24-hour TTL. Catalog and
/// matrix are immutable after startup, so concurrent requests share them
/// without locks; concurrent misses for the same title may both recompute
/// and overwrite, which is harmless since the computation is deterministic.
pub struct RecommendationService {
    catalog: Catalog,
    matrix: SimilarityMatrix,
    cache: Arc<dyn RecommendationCache>,
}

impl RecommendationService {
    pub fn new(
        catalog: Catalog,
        matrix: SimilarityMatrix,
        cache: Arc<dyn RecommendationCache>,
    ) -> Self {
        Self {
            catalog,
            matrix,
            cache,
        }
    }

    /// Top-5 titles most similar to `title`, in descending similarity order.
    ///
    /// Served from the cache when a fresh entry exists; stored order is
    /// returned as-is. A corrupt cached payload surfaces as a decode error
    /// rather than triggering a silent recompute, and a failed cache write
    /// fails the request rather than reporting a success that was never
    /// persisted.
    pub async fn recommend(&self, title: &str) -> AppResult<Vec<String>> {
        if title.is_empty() {
            return Err(AppError::InvalidInput("Movie title is required".to_string()));
        }

        let key = CacheKey::Recommendations(title.to_string());

        if let Some(cached) = self.cache.get(&key).await? {
            tracing::debug!(movie = %title, "Cache hit");
            return Ok(cached);
        }

        tracing::debug!(movie = %title, "Cache miss");

        let row = self
            .catalog
            .row_of(title)
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

        let neighbors = self.matrix.top_similar(row, TOP_N).ok_or_else(|| {
            AppError::Internal(format!("Similarity row {} out of bounds", row))
        })?;

        let mut recommendations = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let name = self.catalog.title_at(neighbor).ok_or_else(|| {
                AppError::Internal(format!("No catalog entry for row {}", neighbor))
            })?;
            recommendations.push(name.to_string());
        }

        self.cache.put(&key, &recommendations, CACHE_TTL_SECS).await?;

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::cache::MockRecommendationCache;
    use crate::models::similarity::SimilarityArtifact;
    use mockall::predicate::eq;

    fn avatar_catalog() -> Catalog {
        let titles = ["Avatar", "Titan", "Nova", "Echo", "Drift", "Blaze", "Mist"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Catalog::from_titles(titles).unwrap()
    }

    fn avatar_matrix() -> SimilarityMatrix {
        let scores = [1.0, 0.9, 0.8, 0.2, 0.1, 0.05, 0.0];
        let entries = scores
            .iter()
            .enumerate()
            .map(|(col, &score)| (0, col, score))
            .collect();
        SimilarityMatrix::from_artifact(SimilarityArtifact {
            rows: 7,
            cols: 7,
            entries,
        })
        .unwrap()
    }

    fn service(cache: MockRecommendationCache) -> RecommendationService {
        RecommendationService::new(avatar_catalog(), avatar_matrix(), Arc::new(cache))
    }

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<Vec<String>>("not json").unwrap_err()
    }

    #[tokio::test]
    async fn test_miss_computes_ranked_titles_and_writes_back() {
        let expected = vec![
            "Titan".to_string(),
            "Nova".to_string(),
            "Echo".to_string(),
            "Drift".to_string(),
            "Blaze".to_string(),
        ];

        let mut cache = MockRecommendationCache::new();
        let key = CacheKey::Recommendations("Avatar".to_string());
        cache
            .expect_get()
            .with(eq(key.clone()))
            .times(1)
            .returning(|_| Ok(None));
        let written = expected.clone();
        cache
            .expect_put()
            .withf(move |k, recs, ttl| {
                *k == CacheKey::Recommendations("Avatar".to_string())
                    && recs == written.as_slice()
                    && *ttl == 86_400
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let result = service(cache).recommend("Avatar").await.unwrap();
        assert_eq!(result, expected);
        assert!(!result.contains(&"Avatar".to_string()));
    }

    #[tokio::test]
    async fn test_hit_returns_stored_order_without_recompute() {
        let cached = vec!["Mist".to_string(), "Blaze".to_string()];

        let mut cache = MockRecommendationCache::new();
        let stored = cached.clone();
        cache
            .expect_get()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        cache.expect_put().times(0);

        let result = service(cache).recommend("Avatar").await.unwrap();
        assert_eq!(result, cached);
    }

    #[tokio::test]
    async fn test_empty_title_is_invalid_input() {
        let mut cache = MockRecommendationCache::new();
        cache.expect_get().times(0);

        let err = service(cache).recommend("").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Movie title is required");
    }

    #[tokio::test]
    async fn test_unknown_title_is_not_found() {
        let mut cache = MockRecommendationCache::new();
        cache.expect_get().times(1).returning(|_| Ok(None));
        cache.expect_put().times(0);

        let err = service(cache).recommend("NotAMovie123").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Movie not found");
    }

    #[tokio::test]
    async fn test_decode_failure_propagates_instead_of_recomputing() {
        let mut cache = MockRecommendationCache::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::CacheDecode(decode_error())));
        cache.expect_put().times(0);

        let err = service(cache).recommend("Avatar").await.unwrap_err();
        assert!(matches!(err, AppError::CacheDecode(_)));
    }

    #[tokio::test]
    async fn test_encode_failure_fails_the_request() {
        let mut cache = MockRecommendationCache::new();
        cache.expect_get().times(1).returning(|_| Ok(None));
        cache
            .expect_put()
            .times(1)
            .returning(|_, _, _| Err(AppError::CacheEncode(decode_error())));

        let err = service(cache).recommend("Avatar").await.unwrap_err();
        assert!(matches!(err, AppError::CacheEncode(_)));
    }
}
