use std::sync::Arc;

use crate::config::Config;
use crate::keywords::extractor::KeywordExtractor;
use crate::matching::skill_matcher::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: SkillMatcher over the loaded catalog.
    pub scorer: Arc<dyn MatchScorer>,
    pub keywords: Arc<KeywordExtractor>,
}
