use std::cmp::Ordering;

use serde::Deserialize;
use sprs::{CsMat, TriMat};

/// On-disk representation of the precomputed similarity matrix.
///
/// A portable JSON document holding the matrix as a triplet list:
/// `{"rows": R, "cols": C, "entries": [[i, j, score], ...]}`. Zero scores may
/// be omitted; absent entries read back as 0.0.
#[derive(Debug, Deserialize)]
pub struct SimilarityArtifact {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<(usize, usize, f32)>,
}

/// Precomputed pairwise similarity scores between all titles, sparse storage.
///
/// Row `i` holds the similarity of title `i` to every other title, indexed by
/// catalog row. Immutable after load and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: CsMat<f32>,
}

impl SimilarityMatrix {
    /// Builds the matrix from a parsed artifact, validating its structure.
    ///
    /// The matrix must be square and every entry index in bounds. Whether the
    /// diagonal dominates its row is not checked; ranking excludes the top
    /// entry positionally instead.
    pub fn from_artifact(artifact: SimilarityArtifact) -> anyhow::Result<Self> {
        if artifact.rows != artifact.cols {
            anyhow::bail!(
                "Similarity matrix must be square, got {}x{}",
                artifact.rows,
                artifact.cols
            );
        }

        let mut triplets = TriMat::new((artifact.rows, artifact.cols));
        for &(row, col, score) in &artifact.entries {
            if row >= artifact.rows || col >= artifact.cols {
                anyhow::bail!(
                    "Similarity entry ({}, {}) out of bounds for {}x{} matrix",
                    row,
                    col,
                    artifact.rows,
                    artifact.cols
                );
            }
            triplets.add_triplet(row, col, score);
        }

        Ok(Self {
            scores: triplets.to_csr(),
        })
    }

    /// Matrix dimension (number of titles covered)
    pub fn len(&self) -> usize {
        self.scores.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.rows() == 0
    }

    /// Row indices of the `k` titles most similar to the one at `row`.
    ///
    /// Densifies the sparse row, pairs every index with its score and sorts
    /// descending. The sort is stable, so equal scores keep ascending index
    /// order. The top-ranked entry is the queried title itself and is
    /// excluded; the slice truncates naturally when fewer titles exist.
    ///
    /// Returns `None` when `row` is outside the matrix.
    pub fn top_similar(&self, row: usize, k: usize) -> Option<Vec<usize>> {
        let sparse_row = self.scores.outer_view(row)?;

        let mut dense = vec![0.0f32; self.scores.cols()];
        for (col, &score) in sparse_row.iter() {
            dense[col] = score;
        }

        let mut ranked: Vec<(usize, f32)> = dense.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Some(ranked.iter().skip(1).take(k).map(|&(col, _)| col).collect())
    }
}
