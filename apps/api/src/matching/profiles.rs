//! Scorer inputs. Both profiles are plain, already-mapped records; the scorer
//! never looks at storage or request shapes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Candidate side of a match. Every text field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub id: Value,
    /// Comma-separated skill names.
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub skills: String,
    /// Raw years of experience. Accepts a JSON number or string.
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub experience_years: String,
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub education: String,
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub description: String,
}

impl CandidateProfile {
    /// Leading-integer parse of `experience_years`: `"5 years"` is 5, `"3.7"` is 3,
    /// `""` and `"n/a"` are `None`.
    pub fn parsed_experience_years(&self) -> Option<i64> {
        parse_leading_int(&self.experience_years)
    }
}

/// Vacancy side of a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VacancyProfile {
    pub id: Value,
    /// Comma-separated required skill names.
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub skills: String,
    /// One of the `ExperienceLevel` labels, or anything else.
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub experience_level: String,
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub education: String,
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub description: String,
}

impl VacancyProfile {
    pub fn required_years(&self) -> u32 {
        ExperienceLevel::from_label(&self.experience_level)
            .map(ExperienceLevel::required_years)
            .unwrap_or(0)
    }
}

/// Closed set of seniority labels a vacancy can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    EntryLevel,
    MidLevel,
    SeniorLevel,
    Executive,
}

impl ExperienceLevel {
    /// Exact label lookup. Unrecognized labels map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Entry Level" => Some(Self::EntryLevel),
            "Mid Level" => Some(Self::MidLevel),
            "Senior Level" => Some(Self::SeniorLevel),
            "Executive" => Some(Self::Executive),
            _ => None,
        }
    }

    pub fn required_years(self) -> u32 {
        match self {
            Self::EntryLevel => 0,
            Self::MidLevel => 3,
            Self::SeniorLevel => 5,
            Self::Executive => 8,
        }
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Accepts a string, a number, an array of strings (joined with ", "), or null
/// for a free-text field.
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    })
}
