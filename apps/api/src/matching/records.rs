//! Stored candidate / vacancy documents and their mapping to scorer profiles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::matching::profiles::{CandidateProfile, VacancyProfile};

/// Candidate document as kept by the applicant store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    pub id: Value,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<String>,
    /// Years of professional experience.
    pub experience: Option<f64>,
    pub education: Option<String>,
    pub current_position: Option<String>,
    pub status: Option<String>,
}

/// Vacancy document as kept by the vacancy store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VacancyRecord {
    pub id: Value,
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills_required: Vec<String>,
    pub experience_level: Option<String>,
    /// Free-text requirements; scored as the required education.
    pub requirements: Option<String>,
}

impl CandidateRecord {
    /// Stored experience as profile text. Unlike the profile mapping, a
    /// recorded 0 stays `"0"`.
    pub fn experience_text(&self) -> String {
        self.experience.map(format_years).unwrap_or_default()
    }
}

impl From<&CandidateRecord> for CandidateProfile {
    fn from(record: &CandidateRecord) -> Self {
        CandidateProfile {
            id: record.id.clone(),
            skills: record.skills.clone().unwrap_or_default(),
            // Zero and absent both read as "no experience recorded" when ranking.
            experience_years: record
                .experience
                .filter(|years| *years != 0.0)
                .map(format_years)
                .unwrap_or_default(),
            education: record.education.clone().unwrap_or_default(),
            description: record.current_position.clone().unwrap_or_default(),
        }
    }
}

impl From<&VacancyRecord> for VacancyProfile {
    fn from(record: &VacancyRecord) -> Self {
        VacancyProfile {
            id: record.id.clone(),
            skills: record.skills_required.join(", "),
            experience_level: record.experience_level.clone().unwrap_or_default(),
            education: record.requirements.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as i64)
    } else {
        years.to_string()
    }
}
