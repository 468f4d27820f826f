//! Hiring-feedback analysis: re-scores a candidate with the interviewer's
//! feedback standing in for the candidate description.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::matching::profiles::{CandidateProfile, VacancyProfile};
use crate::matching::records::{CandidateRecord, VacancyRecord};
use crate::matching::scorer::{MatchLevel, MatchResult, MatchScorer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackAnalysis {
    pub match_score: f64,
    pub match_level: MatchLevel,
    pub recommendation: String,
    pub summary: String,
    pub feedback: String,
    pub generated_at: DateTime<Utc>,
}

/// Scores `candidate` against `vacancy` using `feedback` as the candidate
/// description, and summarises the outcome in one sentence pair.
///
/// Callers must reject blank feedback before calling.
pub fn analyze_feedback(
    scorer: &dyn MatchScorer,
    candidate: &CandidateRecord,
    vacancy: &VacancyRecord,
    feedback: &str,
) -> FeedbackAnalysis {
    let profile = CandidateProfile {
        experience_years: candidate.experience_text(),
        description: feedback.to_string(),
        ..CandidateProfile::from(candidate)
    };
    let result = scorer.score(&profile, &VacancyProfile::from(vacancy));

    info!(
        candidate_id = %candidate.id,
        vacancy_id = %vacancy.id,
        match_score = result.match_score,
        "Hiring feedback analysed"
    );

    FeedbackAnalysis {
        summary: build_summary(&result),
        match_score: result.match_score,
        match_level: result.match_level,
        recommendation: result.recommendation,
        feedback: feedback.to_string(),
        generated_at: Utc::now(),
    }
}

/// e.g. "Based on the hiring feedback, the candidate shows a good match (65%)
/// alignment with the position requirements. Shows good potential for this role."
fn build_summary(result: &MatchResult) -> String {
    format!(
        "Based on the hiring feedback, the candidate shows a {} ({}%) alignment with the position requirements. {}.",
        result.match_level.label().to_lowercase(),
        (result.match_score * 100.0).round() as u32,
        result.recommendation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::CandidateMatcher;
    use serde_json::json;

    fn candidate() -> CandidateRecord {
        CandidateRecord {
            id: json!("cand-9"),
            skills: Some("Rust, Kubernetes".to_string()),
            experience: Some(6.0),
            education: Some("Master of Engineering".to_string()),
            current_position: Some("Site reliability engineer".to_string()),
            status: Some("accepted".to_string()),
            ..Default::default()
        }
    }

    fn vacancy() -> VacancyRecord {
        VacancyRecord {
            id: json!("vac-3"),
            description: Some("Strong communicator who owns production incidents".to_string()),
            skills_required: vec!["Rust".to_string(), "Kubernetes".to_string()],
            experience_level: Some("Senior Level".to_string()),
            requirements: Some("Master".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_feedback_replaces_description() {
        let matcher = CandidateMatcher::default();
        let analysis = analyze_feedback(
            &matcher,
            &candidate(),
            &vacancy(),
            "Strong communicator, owns production incidents calmly",
        );
        // vacancy keywords: {strong, communicator, who, owns, production, incidents}
        // feedback keywords cover 5 of 6
        let expected = 0.35 + 0.25 + 0.20 + 0.20 * 5.0 / 6.0;
        assert!((analysis.match_score - expected).abs() < 1e-9);
        assert_eq!(analysis.match_level, MatchLevel::Excellent);
        assert_eq!(analysis.feedback, "Strong communicator, owns production incidents calmly");
    }

    #[test]
    fn test_unrelated_feedback_lowers_score() {
        let matcher = CandidateMatcher::default();
        let good = analyze_feedback(&matcher, &candidate(), &vacancy(), "owns production incidents");
        let poor = analyze_feedback(&matcher, &candidate(), &vacancy(), "late to interview");
        assert!(good.match_score > poor.match_score);
    }

    #[test]
    fn test_zero_experience_meets_entry_level() {
        let newcomer = CandidateRecord {
            id: json!("cand-0"),
            experience: Some(0.0),
            status: Some("accepted".to_string()),
            ..Default::default()
        };
        let junior_role = VacancyRecord {
            id: json!("vac-0"),
            description: Some("team player".to_string()),
            experience_level: Some("Entry Level".to_string()),
            ..Default::default()
        };
        let analysis = analyze_feedback(&CandidateMatcher::default(), &newcomer, &junior_role, "team player");
        // experience 0.25 + description 0.20
        assert!((analysis.match_score - 0.45).abs() < 1e-9);
        assert_eq!(analysis.match_level, MatchLevel::Moderate);
    }

    #[test]
    fn test_summary_text() {
        let result = MatchResult {
            match_score: 0.654,
            candidate_id: json!(1),
            vacancy_id: json!(2),
            score_breakdown: crate::matching::scorer::ScoreBreakdown {
                skills: 1.0,
                experience: 1.0,
                education: 0.5,
                feedback: 0.0,
            },
            match_level: MatchLevel::Good,
            recommendation: MatchLevel::Good.recommendation().to_string(),
        };
        assert_eq!(
            build_summary(&result),
            "Based on the hiring feedback, the candidate shows a good match (65%) alignment \
             with the position requirements. Shows good potential for this role."
        );
    }
}
