//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppJson};
use crate::matching::feedback::{analyze_feedback, FeedbackAnalysis};
use crate::matching::profiles::{CandidateProfile, VacancyProfile};
use crate::matching::ranking::{rank_candidates, top_fraction, RankedCandidate};
use crate::matching::records::{CandidateRecord, VacancyRecord};
use crate::matching::scorer::MatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub candidate: Option<CandidateProfile>,
    pub vacancy: Option<VacancyProfile>,
}

#[derive(Debug, Deserialize)]
pub struct TopCandidatesRequest {
    pub vacancy: VacancyRecord,
    /// `null` entries are tolerated and left out of the ranking.
    #[serde(default)]
    pub candidates: Vec<Option<CandidateRecord>>,
    /// Share of the ranked pool to return, in (0, 1]. Defaults to the configured fraction.
    pub fraction: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct TopCandidatesResponse {
    pub vacancy_id: Value,
    pub total_candidates: usize,
    pub top_candidates: Vec<RankedCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackAnalysisRequest {
    pub candidate: CandidateRecord,
    pub vacancy: VacancyRecord,
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores one candidate profile against one vacancy profile.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result = state
        .scorer
        .try_score(request.candidate.as_ref(), request.vacancy.as_ref())?;
    Ok(Json(result))
}

/// POST /api/v1/vacancies/top-candidates
///
/// Ranks the submitted applicant pool for a vacancy and returns the top share.
pub async fn handle_top_candidates(
    State(state): State<AppState>,
    AppJson(request): AppJson<TopCandidatesRequest>,
) -> Result<Json<TopCandidatesResponse>, AppError> {
    let fraction = request
        .fraction
        .unwrap_or(state.config.top_candidate_fraction);
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(AppError::Validation(format!(
            "fraction must be in (0, 1], got {fraction}"
        )));
    }

    let ranked = rank_candidates(state.scorer.as_ref(), &request.vacancy, &request.candidates);
    let total_candidates = ranked.len();

    Ok(Json(TopCandidatesResponse {
        vacancy_id: request.vacancy.id.clone(),
        total_candidates,
        top_candidates: top_fraction(ranked, fraction),
    }))
}

/// POST /api/v1/candidates/feedback-analysis
///
/// Analyses hiring feedback for an accepted candidate against the vacancy.
pub async fn handle_feedback_analysis(
    State(state): State<AppState>,
    AppJson(request): AppJson<FeedbackAnalysisRequest>,
) -> Result<Json<FeedbackAnalysis>, AppError> {
    if request.feedback.trim().is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }
    if request.candidate.status.as_deref() != Some("accepted") {
        return Err(AppError::Validation(
            "Feedback can only be processed for accepted candidates".to_string(),
        ));
    }

    let analysis = analyze_feedback(
        state.scorer.as_ref(),
        &request.candidate,
        &request.vacancy,
        &request.feedback,
    );
    Ok(Json(analysis))
}
