use std::path::Path;

use crate::models::{SimilarityArtifact, SimilarityMatrix};

/// Downloads the similarity artifact if it is not already present locally.
///
/// Runs once at startup; a fetch failure is fatal since the service cannot
/// answer anything without the matrix.
pub async fn ensure_artifact(url: &str, path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Similarity artifact already present");
        return Ok(());
    }

    tracing::info!(%url, "Downloading similarity artifact");

    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(path, &bytes).await?;

    tracing::info!(path = %path.display(), size = bytes.len(), "Download complete");

    Ok(())
}

/// Parses the artifact on disk into the in-memory similarity matrix
pub fn load_matrix(path: &Path) -> anyhow::Result<SimilarityMatrix> {
    let raw = std::fs::read_to_string(path)?;
    let artifact: SimilarityArtifact = serde_json::from_str(&raw)?;
    SimilarityMatrix::from_artifact(artifact)
}
