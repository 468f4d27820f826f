//! Candidate ↔ vacancy match scoring.
//!
//! `CandidateMatcher` is a pure, deterministic, weighted-feature scorer over
//! free-text fields. Four unweighted sub-scores (skills, experience, education,
//! description overlap) are combined with fixed `MatchWeights` into a score in
//! [0, 1], which is then bucketed into a `MatchLevel`.
//!
//! `AppState` holds the scorer as an `Arc<dyn MatchScorer>`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::matching::keywords::{extract_keywords, parse_skills, skills_overlap};
use crate::matching::profiles::{CandidateProfile, VacancyProfile};
use crate::matching::weights::MatchWeights;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    /// A profile record was absent. Carries the name of the missing record.
    #[error("Invalid input: {0} record is missing")]
    InvalidInput(&'static str),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The four unweighted sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub feedback: f64,
}

/// Categorical band of a match score. Bands use inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Low Match")]
    Low,
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Moderate => "Moderate Match",
            Self::Low => "Low Match",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Strongly recommended for this position",
            Self::Good => "Shows good potential for this role",
            Self::Moderate => "May need additional screening",
            Self::Low => "May not be the best fit for this position",
        }
    }
}

/// Result of scoring one candidate against one vacancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64, // 0.0 – 1.0
    pub candidate_id: Value,
    pub vacancy_id: Value,
    pub score_breakdown: ScoreBreakdown,
    pub match_level: MatchLevel,
    pub recommendation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a candidate profile against a vacancy profile.
///
/// `score` is total: incomplete profiles degrade to zero sub-scores. Only a
/// missing record is an error, surfaced through `try_score`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, vacancy: &VacancyProfile) -> MatchResult;

    fn try_score(
        &self,
        candidate: Option<&CandidateProfile>,
        vacancy: Option<&VacancyProfile>,
    ) -> Result<MatchResult, MatchError> {
        let candidate = candidate.ok_or_else(|| {
            warn!("Match requested without a candidate record");
            MatchError::InvalidInput("candidate")
        })?;
        let vacancy = vacancy.ok_or_else(|| {
            warn!("Match requested without a vacancy record");
            MatchError::InvalidInput("vacancy")
        })?;
        Ok(self.score(candidate, vacancy))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CandidateMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Heuristic token-overlap matcher. Holds nothing but its weights.
#[derive(Debug, Clone, Default)]
pub struct CandidateMatcher {
    weights: MatchWeights,
}

impl CandidateMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// Computes the four sub-scores without applying weights.
    pub fn breakdown(candidate: &CandidateProfile, vacancy: &VacancyProfile) -> ScoreBreakdown {
        ScoreBreakdown {
            skills: skills_score(&candidate.skills, &vacancy.skills),
            experience: experience_score(candidate.parsed_experience_years(), vacancy.required_years()),
            education: education_score(&candidate.education, &vacancy.education),
            feedback: description_score(&candidate.description, &vacancy.description),
        }
    }

    fn weighted(&self, breakdown: &ScoreBreakdown) -> f64 {
        self.weights.skills() * breakdown.skills
            + self.weights.experience() * breakdown.experience
            + self.weights.education() * breakdown.education
            + self.weights.feedback() * breakdown.feedback
    }
}

impl MatchScorer for CandidateMatcher {
    fn score(&self, candidate: &CandidateProfile, vacancy: &VacancyProfile) -> MatchResult {
        let breakdown = Self::breakdown(candidate, vacancy);
        debug!(
            candidate_id = %candidate.id,
            vacancy_id = %vacancy.id,
            skills = breakdown.skills,
            experience = breakdown.experience,
            education = breakdown.education,
            feedback = breakdown.feedback,
            "Sub-scores calculated"
        );

        let match_score = self.weighted(&breakdown).clamp(0.0, 1.0);
        let match_level = MatchLevel::from_score(match_score);
        debug!(match_score, level = match_level.label(), "Match scored");

        MatchResult {
            match_score,
            candidate_id: candidate.id.clone(),
            vacancy_id: vacancy.id.clone(),
            score_breakdown: breakdown,
            match_level,
            recommendation: match_level.recommendation().to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Share of vacancy skills covered by the candidate's skills (fuzzy containment).
fn skills_score(candidate_skills: &str, vacancy_skills: &str) -> f64 {
    let candidate = parse_skills(candidate_skills);
    let vacancy = parse_skills(vacancy_skills);
    if candidate.is_empty() || vacancy.is_empty() {
        return 0.0;
    }

    let matched = candidate
        .iter()
        .filter(|skill| vacancy.iter().any(|required| skills_overlap(skill, required)))
        .count();

    ratio(matched, vacancy.len())
}

fn experience_score(candidate_years: Option<i64>, required_years: u32) -> f64 {
    let Some(years) = candidate_years else {
        return 0.0;
    };
    if years < 0 {
        return 0.0;
    }
    // A zero-year bar is met by anyone with non-negative experience.
    if required_years == 0 {
        return 1.0;
    }
    let required = i64::from(required_years);
    if years >= required {
        1.0
    } else {
        (years as f64 / required as f64).max(0.0)
    }
}

/// 1.0 when the candidate's education mentions the requirement, 0.5 for any
/// other present education, 0.0 when either side is blank.
fn education_score(candidate_education: &str, required_education: &str) -> f64 {
    let candidate = candidate_education.trim();
    let required = required_education.trim();
    if candidate.is_empty() || required.is_empty() {
        return 0.0;
    }
    if candidate.to_lowercase().contains(&required.to_lowercase()) {
        1.0
    } else {
        0.5
    }
}

/// Share of vacancy description keywords present in the candidate description.
fn description_score(candidate_description: &str, vacancy_description: &str) -> f64 {
    if candidate_description.trim().is_empty() || vacancy_description.trim().is_empty() {
        return 0.0;
    }
    let vacancy = extract_keywords(vacancy_description);
    let candidate = extract_keywords(candidate_description);

    let matched = candidate.intersection(&vacancy).count();
    ratio(matched, vacancy.len())
}

fn ratio(matched: usize, total: usize) -> f64 {
    (matched as f64 / total.max(1) as f64).clamp(0.0, 1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
