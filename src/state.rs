use std::sync::Arc;

use crate::services::RecommendationService;

/// Shared application state.
///
/// Constructed once after the catalog and similarity matrix are loaded, then
/// handed to the router. Everything inside is immutable for the process
/// lifetime; the cache behind the service is an external store with its own
/// per-key atomicity, so no in-process synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(recommender: RecommendationService) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }
}
