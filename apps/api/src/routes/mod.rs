pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor_handlers;
use crate::matcher::handlers as matcher_handlers;
use crate::parser::handlers as parser_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé parsing
        .route("/api/v1/resumes/parse", post(parser_handlers::handle_parse))
        // Job matching
        .route("/api/v1/jobs/match", post(matcher_handlers::handle_match))
        .route(
            "/api/v1/jobs/recommend",
            post(matcher_handlers::handle_recommend),
        )
        .route(
            "/api/v1/jobs/refresh",
            post(matcher_handlers::handle_refresh),
        )
        // Advisory
        .route(
            "/api/v1/skills/trending",
            get(advisor_handlers::handle_trending),
        )
        .route(
            "/api/v1/skills/predict",
            post(advisor_handlers::handle_predict),
        )
        .route(
            "/api/v1/interview/questions",
            post(advisor_handlers::handle_questions),
        )
        .route("/api/v1/mentor", post(advisor_handlers::handle_mentor))
        .with_state(state)
}
