use serde::Serialize;

use crate::matching::scorer::MatchError;

/// Allowed drift of the weight sum from 1.0.
const SUM_TOLERANCE: f64 = 1e-6;

/// Per-dimension weights of the match score. Fixed once a matcher is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchWeights {
    skills: f64,
    experience: f64,
    education: f64,
    feedback: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            experience: 0.25,
            education: 0.20,
            feedback: 0.20,
        }
    }
}

impl MatchWeights {
    /// Builds a weight set. Every weight must be finite and non-negative and the
    /// four must sum to 1.0; sets that don't are rejected, never renormalised.
    pub fn new(
        skills: f64,
        experience: f64,
        education: f64,
        feedback: f64,
    ) -> Result<Self, MatchError> {
        let weights = Self {
            skills,
            experience,
            education,
            feedback,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn skills(&self) -> f64 {
        self.skills
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn education(&self) -> f64 {
        self.education
    }

    pub fn feedback(&self) -> f64 {
        self.feedback
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.feedback
    }

    fn validate(&self) -> Result<(), MatchError> {
        let named = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("feedback", self.feedback),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{name} weight must be a finite non-negative number, got {weight}"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = MatchWeights::default();
        assert!((w.sum() - 1.0).abs() < SUM_TOLERANCE);
        assert_eq!(w.skills(), 0.35);
        assert_eq!(w.experience(), 0.25);
        assert_eq!(w.education(), 0.20);
        assert_eq!(w.feedback(), 0.20);
    }

    #[test]
    fn test_custom_weights_accepted() {
        let w = MatchWeights::new(0.5, 0.2, 0.2, 0.1).unwrap();
        assert_eq!(w.skills(), 0.5);
    }

    #[test]
    fn test_sum_off_by_more_than_tolerance_rejected() {
        let err = MatchWeights::new(0.4, 0.25, 0.20, 0.20).unwrap_err();
        assert!(matches!(err, MatchError::InvalidWeights(_)));
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = MatchWeights::new(1.2, -0.2, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("experience"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        assert!(MatchWeights::new(f64::NAN, 0.5, 0.25, 0.25).is_err());
    }
}
