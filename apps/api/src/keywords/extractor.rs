//! Keyword Extractor: ranks the most frequent meaningful tokens in a text.
//!
//! Tokens come from `EnglishAnalyzer`; anything of two characters or fewer and
//! anything made only of digits is dropped before counting. Ties in frequency
//! keep the order in which tokens first appeared.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::AppError;
use crate::keywords::analyzer::EnglishAnalyzer;

const MIN_TOKEN_CHARS: usize = 3;

#[derive(Default)]
pub struct KeywordExtractor {
    analyzer: EnglishAnalyzer,
}

impl KeywordExtractor {
    /// Returns up to `top_n` normalized tokens by descending frequency.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        if top_n == 0 || text.is_empty() {
            return Vec::new();
        }

        let frequencies = self.count_tokens(text);
        let distinct = frequencies.len();

        let keywords = rank(frequencies, top_n);
        debug!(distinct, returned = keywords.len(), "Extracted keywords");
        keywords
    }

    /// Same as `extract_keywords` for raw bytes handed over by a text-extraction step.
    /// Fails with `AppError::Processing` when the bytes are not valid UTF-8.
    pub fn extract_keywords_from_bytes(
        &self,
        bytes: &[u8],
        top_n: usize,
    ) -> Result<Vec<String>, AppError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AppError::Processing(format!("Text is not valid UTF-8: {e}")))?;
        Ok(self.extract_keywords(text, top_n))
    }

    /// Token frequency table in first-occurrence order.
    fn count_tokens(&self, text: &str) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in self.analyzer.analyze(text).filter(|t| is_meaningful(t)) {
            match positions.get(&token) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    positions.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }

        counts
    }
}

fn is_meaningful(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && !token.chars().all(|c| c.is_ascii_digit())
}

/// Stable sort keeps first-occurrence order among equal counts.
fn rank(mut frequencies: Vec<(String, usize)>, top_n: usize) -> Vec<String> {
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies
        .into_iter()
        .take(top_n)
        .map(|(token, _)| token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str, top_n: usize) -> Vec<String> {
        KeywordExtractor::default().extract_keywords(text, top_n)
    }

    #[test]
    fn test_drops_short_and_numeric_tokens() {
        let keywords = extract("AI is 2023 great great great", 5);
        assert_eq!(keywords, vec!["great"]);
    }

    #[test]
    fn test_top_n_zero_is_empty() {
        assert!(extract("rust rust rust tokio", 0).is_empty());
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(extract("", 10).is_empty());
    }

    #[test]
    fn test_all_stop_words_is_empty() {
        assert!(extract("the and of to with", 10).is_empty());
    }

    #[test]
    fn test_orders_by_frequency() {
        let keywords = extract("axum tokio rust rust tokio rust", 3);
        assert_eq!(keywords, vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let keywords = extract("rust tokio axum tokio rust axum", 3);
        assert_eq!(keywords, vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let keywords = extract("alpha beta gamma delta alpha", 2);
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0], "alpha");
    }

    #[test]
    fn test_fewer_tokens_than_top_n() {
        assert_eq!(extract("python", 10), vec!["python"]);
    }

    #[test]
    fn test_variants_counted_together() {
        let keywords = extract("Developers developing developed rust; deploy the rust", 2);
        assert_eq!(keywords, vec!["develop", "rust"]);
    }

    #[test]
    fn test_mixed_alphanumeric_tokens_survive() {
        assert_eq!(extract("web3 1999 2000", 5), vec!["web3"]);
    }

    #[test]
    fn test_is_meaningful() {
        assert!(is_meaningful("rust"));
        assert!(!is_meaningful("go"));
        assert!(!is_meaningful("12345"));
        assert!(is_meaningful("k8s"));
    }

    #[test]
    fn test_from_bytes_accepts_utf8() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor
            .extract_keywords_from_bytes("résumé résumé python".as_bytes(), 1)
            .unwrap();
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let extractor = KeywordExtractor::default();
        let err = extractor
            .extract_keywords_from_bytes(&[0x66, 0x6f, 0xff, 0xfe], 5)
            .unwrap_err();
        assert!(matches!(err, AppError::Processing(_)));
    }
}
