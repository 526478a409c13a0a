// Keyword extraction: English analysis, frequency counting and top-N ranking.

pub mod analyzer;
pub mod extractor;
pub mod handlers;
