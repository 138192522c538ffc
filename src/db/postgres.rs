use sqlx::{postgres::PgPoolOptions, PgPool};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Loads all movie titles in stable row order.
///
/// The returned position of each title is its row index into the similarity
/// matrix, so the query order must match the order the artifact was
/// precomputed against.
pub async fn load_movie_titles(pool: &PgPool) -> anyhow::Result<Vec<String>> {
    let titles = sqlx::query_scalar::<_, String>("SELECT title FROM movies ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(titles)
}
