use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{CandidateMatcher, MatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: CandidateMatcher with the configured weights.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(CandidateMatcher::new(config.match_weights));
        Self { config, scorer }
    }
}
