//! Skill Matcher: lexical detection of catalog skills and weighted JD/resume scoring.
//!
//! Default (and only) backend: `SkillMatcher`, a pure-Rust matcher that compiles
//! the whole catalog into one `RegexSet` at startup.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so the backend can be swapped
//! without touching handlers.

use std::collections::BTreeSet;

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::catalog::SkillCatalog;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Result of scoring one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: f64, // 0 – 100, two decimal places
    pub jd_skills: BTreeSet<String>,
    pub resume_skills: BTreeSet<String>,
    pub matched_skills: BTreeSet<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a job description.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, jd_text: &str, resume_text: &str) -> MatchResult;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;

    fn catalog(&self) -> &SkillCatalog;
}

// ────────────────────────────────────────────────────────────────────────────
// SkillMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Whole-word / whole-phrase matcher over a `SkillCatalog`.
///
/// Algorithm:
/// 1. Lowercase the text.
/// 2. Run every catalog pattern `(?:^|\W)<term>(?:\W|$)` in a single pass.
/// 3. score = Σ weight(matched) / Σ weight(jd skills) × 100, rounded to 2 dp.
pub struct SkillMatcher {
    catalog: SkillCatalog,
    /// Catalog terms in pattern-index order.
    terms: Vec<String>,
    patterns: RegexSet,
}

impl SkillMatcher {
    pub fn new(catalog: SkillCatalog) -> Result<Self, regex::Error> {
        let terms: Vec<String> = catalog.terms().map(str::to_string).collect();
        let patterns = RegexSet::new(terms.iter().map(|term| boundary_pattern(term)))?;

        Ok(Self {
            catalog,
            terms,
            patterns,
        })
    }

    /// Returns the catalog terms present in `text`. Multiplicity is ignored.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        if text.is_empty() {
            return BTreeSet::new();
        }

        let lowered = text.to_lowercase();
        self.patterns
            .matches(&lowered)
            .into_iter()
            .map(|idx| self.terms[idx].clone())
            .collect()
    }

    pub fn calculate_score(&self, jd_text: &str, resume_text: &str) -> MatchResult {
        let jd_skills = self.extract_skills(jd_text);
        let resume_skills = self.extract_skills(resume_text);

        let matched_skills: BTreeSet<String> = jd_skills
            .intersection(&resume_skills)
            .cloned()
            .collect();

        let jd_total_weight = self.total_weight(&jd_skills);
        let matched_weight = self.total_weight(&matched_skills);

        // No recognized JD skills scores 0 regardless of the resume.
        let score = if jd_total_weight == 0.0 {
            0.0
        } else {
            round_to_hundredths((matched_weight / jd_total_weight * 100.0).clamp(0.0, 100.0))
        };

        debug!(
            jd_skills = jd_skills.len(),
            resume_skills = resume_skills.len(),
            matched_skills = matched_skills.len(),
            score,
            "Scored resume against job description"
        );

        MatchResult {
            score,
            jd_skills,
            resume_skills,
            matched_skills,
        }
    }

    fn total_weight(&self, skills: &BTreeSet<String>) -> f64 {
        skills.iter().map(|s| self.catalog.weight(s)).sum()
    }
}

impl MatchScorer for SkillMatcher {
    fn score(&self, jd_text: &str, resume_text: &str) -> MatchResult {
        self.calculate_score(jd_text, resume_text)
    }

    fn backend(&self) -> &'static str {
        "lexical"
    }

    fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }
}

/// The term must sit between non-word characters or the ends of the text.
fn boundary_pattern(term: &str) -> String {
    format!(r"(?:^|\W){}(?:\W|$)", regex::escape(term))
}

/// Half-up rounding at the hundredths place for non-negative values.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
