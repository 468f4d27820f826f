use anyhow::{bail, Context, Result};

use crate::matching::ranking::DEFAULT_TOP_FRACTION;
use crate::matching::weights::MatchWeights;

const WEIGHT_VARS: [&str; 4] = [
    "MATCH_WEIGHT_SKILLS",
    "MATCH_WEIGHT_EXPERIENCE",
    "MATCH_WEIGHT_EDUCATION",
    "MATCH_WEIGHT_FEEDBACK",
];

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub match_weights: MatchWeights,
    pub top_candidate_fraction: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            match_weights: load_weights(&lookup)?,
            top_candidate_fraction: load_fraction(&lookup)?,
        })
    }
}

/// Weights are all-or-none: either every `MATCH_WEIGHT_*` variable is set or
/// the default weights apply.
fn load_weights<F>(lookup: &F) -> Result<MatchWeights>
where
    F: Fn(&str) -> Option<String>,
{
    let raw: Vec<Option<String>> = WEIGHT_VARS.iter().map(|key| lookup(key)).collect();
    if raw.iter().all(Option::is_none) {
        return Ok(MatchWeights::default());
    }

    let mut values = [0.0_f64; 4];
    for ((key, value), slot) in WEIGHT_VARS.iter().zip(raw).zip(values.iter_mut()) {
        let value = value.with_context(|| {
            format!("'{key}' must be set when any MATCH_WEIGHT_* variable is set")
        })?;
        *slot = value
            .trim()
            .parse::<f64>()
            .with_context(|| format!("'{key}' must be a number, got '{value}'"))?;
    }

    let [skills, experience, education, feedback] = values;
    MatchWeights::new(skills, experience, education, feedback)
        .context("MATCH_WEIGHT_* variables do not form a valid weight set")
}

fn load_fraction<F>(lookup: &F) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup("TOP_CANDIDATE_FRACTION") else {
        return Ok(DEFAULT_TOP_FRACTION);
    };
    let fraction = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("'TOP_CANDIDATE_FRACTION' must be a number, got '{raw}'"))?;
    if !(fraction > 0.0 && fraction <= 1.0) {
        bail!("'TOP_CANDIDATE_FRACTION' must be in (0, 1], got {fraction}");
    }
    Ok(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.match_weights, MatchWeights::default());
        assert_eq!(config.top_candidate_fraction, DEFAULT_TOP_FRACTION);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_full_weight_set_loaded() {
        let config = config_from(&[
            ("MATCH_WEIGHT_SKILLS", "0.4"),
            ("MATCH_WEIGHT_EXPERIENCE", "0.3"),
            ("MATCH_WEIGHT_EDUCATION", "0.1"),
            ("MATCH_WEIGHT_FEEDBACK", "0.2"),
        ])
        .unwrap();
        assert_eq!(config.match_weights.skills(), 0.4);
        assert_eq!(config.match_weights.experience(), 0.3);
    }

    #[test]
    fn test_partial_weight_set_rejected() {
        let err = config_from(&[("MATCH_WEIGHT_SKILLS", "0.5")]).unwrap_err();
        assert!(err.to_string().contains("MATCH_WEIGHT_EXPERIENCE"));
    }

    #[test]
    fn test_weights_not_summing_to_one_rejected() {
        let err = config_from(&[
            ("MATCH_WEIGHT_SKILLS", "0.5"),
            ("MATCH_WEIGHT_EXPERIENCE", "0.5"),
            ("MATCH_WEIGHT_EDUCATION", "0.5"),
            ("MATCH_WEIGHT_FEEDBACK", "0.5"),
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("sum to 1.0"));
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        let err = config_from(&[
            ("MATCH_WEIGHT_SKILLS", "lots"),
            ("MATCH_WEIGHT_EXPERIENCE", "0.25"),
            ("MATCH_WEIGHT_EDUCATION", "0.2"),
            ("MATCH_WEIGHT_FEEDBACK", "0.2"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("MATCH_WEIGHT_SKILLS"));
    }

    #[test]
    fn test_fraction_bounds() {
        assert_eq!(
            config_from(&[("TOP_CANDIDATE_FRACTION", "0.5")])
                .unwrap()
                .top_candidate_fraction,
            0.5
        );
        assert!(config_from(&[("TOP_CANDIDATE_FRACTION", "0")]).is_err());
        assert!(config_from(&[("TOP_CANDIDATE_FRACTION", "1.5")]).is_err());
        assert!(config_from(&[("TOP_CANDIDATE_FRACTION", "half")]).is_err());
    }
}
