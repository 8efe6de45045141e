//! Axum route handlers for the advisory API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::interview::{self, InterviewQuestion};
use crate::advisor::mentor::{self, MentorReply};
use crate::advisor::progression::{self, SkillPrediction};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::providers::trends::{self, TrendingSkill};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub trending_skills: Vec<TrendingSkill>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Missing fields default to empty per the permissive input policy.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predictions: Vec<SkillPrediction>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct MentorRequest {
    pub query: String,
    #[serde(default)]
    pub resume: ResumeRecord,
}

/// GET /api/v1/skills/trending
///
/// The current trending-skill table.
pub async fn handle_trending() -> Json<TrendingResponse> {
    Json(TrendingResponse {
        trending_skills: trends::trending_skills(),
    })
}

/// POST /api/v1/skills/predict
///
/// Up to five predicted next skills for the given skill set.
pub async fn handle_predict(
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let predictions =
        progression::predict_future_skills(&request.skills, &trends::trending_skills());
    Ok(Json(PredictResponse { predictions }))
}

/// POST /api/v1/interview/questions
///
/// Up to twenty interview questions generated from a résumé record.
/// Missing body fields default to empty, so partial records are fine.
pub async fn handle_questions(
    State(state): State<AppState>,
    Json(resume): Json<ResumeRecord>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let questions =
        interview::predict_interview_questions(&resume, state.config.question_shuffle_seed);
    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/mentor
///
/// Free-form career question answered against the caller's résumé and the
/// current job corpus. An empty query gets the degenerate-request reply
/// rather than an error status.
pub async fn handle_mentor(
    State(state): State<AppState>,
    Json(request): Json<MentorRequest>,
) -> Result<Json<MentorReply>, AppError> {
    if request.query.trim().is_empty() {
        tracing::debug!("empty mentor query, returning the degenerate-request reply");
        return Ok(Json(mentor::fallback_reply()));
    }

    let postings = state.engine.postings_snapshot().await;
    let reply = mentor::mentor_response(
        &request.query,
        &request.resume,
        &trends::trending_skills(),
        &postings,
    );
    Ok(Json(reply))
}
