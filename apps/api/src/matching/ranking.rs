//! Ranking a vacancy's applicant pool by match score.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::matching::profiles::{CandidateProfile, VacancyProfile};
use crate::matching::records::{CandidateRecord, VacancyRecord};
use crate::matching::scorer::MatchScorer;

/// Share of the ranked pool kept by default.
pub const DEFAULT_TOP_FRACTION: f64 = 0.3;

/// Absorbs float noise in `len × fraction` (10 × 0.3 is 3.0000000000000004).
const CUTOFF_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: CandidateRecord,
    pub match_score: f64,
}

/// Scores every candidate against the vacancy and sorts by score, best first.
///
/// A candidate that cannot be scored never aborts the batch: absent records are
/// logged and left out, non-finite scores are logged and replaced by 0.
/// Equal scores keep their input order.
pub fn rank_candidates(
    scorer: &dyn MatchScorer,
    vacancy: &VacancyRecord,
    candidates: &[Option<CandidateRecord>],
) -> Vec<RankedCandidate> {
    let vacancy_profile = VacancyProfile::from(vacancy);

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let profile = record.as_ref().map(CandidateProfile::from);
            match scorer.try_score(profile.as_ref(), Some(&vacancy_profile)) {
                Ok(result) => {
                    let match_score = if result.match_score.is_finite() {
                        result.match_score
                    } else {
                        warn!(
                            candidate_id = %result.candidate_id,
                            "Non-finite match score, defaulting to 0"
                        );
                        0.0
                    };
                    record.clone().map(|candidate| RankedCandidate {
                        candidate,
                        match_score,
                    })
                }
                Err(e) => {
                    warn!(position, "Skipping candidate: {e}");
                    None
                }
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    info!(
        vacancy_id = %vacancy.id,
        scored = ranked.len(),
        submitted = candidates.len(),
        "Candidates ranked"
    );
    ranked
}

/// Keeps the first `ceil(len × fraction)` entries of an already ranked list.
/// `fraction` is clamped to [0, 1].
pub fn top_fraction(mut ranked: Vec<RankedCandidate>, fraction: f64) -> Vec<RankedCandidate> {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        DEFAULT_TOP_FRACTION
    };
    let keep = (ranked.len() as f64 * fraction - CUTOFF_EPSILON).ceil().max(0.0) as usize;
    ranked.truncate(keep);
    ranked
}
