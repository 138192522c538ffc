use std::path::Path;
use std::sync::Arc;

use cinerec_api::config::Config;
use cinerec_api::db::{self, RedisCache};
use cinerec_api::models::Catalog;
use cinerec_api::routes::create_router;
use cinerec_api::services::{artifact, RecommendationService};
use cinerec_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Fetch and load the similarity matrix before accepting any traffic
    let matrix_path = Path::new(&config.matrix_path);
    artifact::ensure_artifact(&config.matrix_url, matrix_path).await?;
    let matrix = artifact::load_matrix(matrix_path)?;

    // Load the movie catalog from PostgreSQL
    let pool = db::create_pool(&config.database_url).await?;
    let titles = db::postgres::load_movie_titles(&pool).await?;
    let catalog = Catalog::from_titles(titles)?;

    anyhow::ensure!(
        matrix.len() == catalog.len(),
        "Similarity matrix covers {} titles but the catalog has {}",
        matrix.len(),
        catalog.len()
    );

    tracing::info!(titles = catalog.len(), "Catalog and similarity matrix loaded");

    let redis_client = db::create_redis_client(&config.redis_url())?;
    let cache = Arc::new(RedisCache::new(redis_client));

    let recommender = RecommendationService::new(catalog, matrix, cache);
    let app = create_router(AppState::new(recommender));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(host = %config.host, port = config.port, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
