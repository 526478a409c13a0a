//! English analyzer: word segmentation, possessive stripping, lowercasing,
//! stop-word removal and stemming.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// English stop words removed before stemming.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const POSSESSIVE_SUFFIXES: &[&str] = &["'s", "\u{2019}s", "\u{ff07}s"];

pub struct EnglishAnalyzer {
    stop_words: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl EnglishAnalyzer {
    /// Splits `text` into normalized tokens, in text order.
    pub fn analyze<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.unicode_words().filter_map(move |word| {
            let lowered = word.to_lowercase();
            let base = strip_possessive(&lowered);
            if base.is_empty() || self.stop_words.contains(base) {
                return None;
            }
            Some(self.stemmer.stem(base).into_owned())
        })
    }
}

fn strip_possessive(word: &str) -> &str {
    POSSESSIVE_SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(*suffix))
        .unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Vec<String> {
        EnglishAnalyzer::default().analyze(text).collect()
    }

    #[test]
    fn test_removes_stop_words() {
        assert_eq!(analyze("the quick brown fox"), vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(analyze("Graph NETWORK"), vec!["graph", "network"]);
    }

    #[test]
    fn test_stems_grammatical_variants_together() {
        assert_eq!(
            analyze("developers developing developed"),
            vec!["develop", "develop", "develop"]
        );
        assert_eq!(analyze("graphs graph"), vec!["graph", "graph"]);
    }

    #[test]
    fn test_strips_possessive() {
        assert_eq!(analyze("Python's python"), vec!["python", "python"]);
        assert_eq!(analyze("team\u{2019}s"), vec!["team"]);
    }

    #[test]
    fn test_splits_on_punctuation() {
        assert_eq!(analyze("rust,tokio;axum."), vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn test_all_stop_words_yield_nothing() {
        assert!(analyze("the a an and or").is_empty());
        assert!(analyze("").is_empty());
        assert!(analyze("  ...  ").is_empty());
    }
}
