use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    movie: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<RecommendResponse>> {
    let movie = params.movie.as_deref().unwrap_or("");
    let recommendations = state.recommender.recommend(movie).await?;
    Ok(Json(RecommendResponse { recommendations }))
}
