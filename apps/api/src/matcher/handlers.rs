//! Axum route handlers for the job matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matcher::engine::DEFAULT_TOP_N;
use crate::models::job::{MatchResult, Recommendation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// Missing fields default to empty per the permissive input policy.
    #[serde(default)]
    pub skills: Vec<String>,
    pub job_title: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub job_count: usize,
}

/// POST /api/v1/jobs/match
///
/// Exact skill-overlap score against one job, looked up by title.
/// 404 when the title is not in the current corpus.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::MalformedInput(
            "job_title cannot be empty".to_string(),
        ));
    }

    let result = state
        .engine
        .match_score(&request.skills, &request.job_title)
        .await?;
    Ok(Json(result))
}

/// POST /api/v1/jobs/recommend
///
/// TF-IDF cosine ranking of the corpus against the caller's skills.
/// An empty skill list is valid and returns corpus-order results.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let top_n = request.top_n.unwrap_or(DEFAULT_TOP_N);
    let recommendations = state.engine.recommend(&request.skills, top_n).await;
    Ok(Json(RecommendResponse { recommendations }))
}

/// POST /api/v1/jobs/refresh
///
/// Re-fetches the job feed and refits the vector space. On fetch failure
/// the last-good corpus stays live, so this never degrades service.
pub async fn handle_refresh(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let job_count = state.engine.refresh().await;
    Ok(Json(RefreshResponse { job_count }))
}
