pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match", post(handlers::handle_match))
        .route(
            "/api/v1/vacancies/top-candidates",
            post(handlers::handle_top_candidates),
        )
        .route(
            "/api/v1/candidates/feedback-analysis",
            post(handlers::handle_feedback_analysis),
        )
        .with_state(state)
}
