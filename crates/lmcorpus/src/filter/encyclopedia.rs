//! # Encyclopedia Corpus Filter

use crate::filter::LineFilter;

/// The literal document boundary marker of the Westbury Lab Wikipedia corpus.
pub const DOCUMENT_END_MARKER: &str = "---END.OF.DOCUMENT---";

/// Lines with fewer whitespace tokens than this are treated as titles or noise.
pub const MIN_ENCYCLOPEDIA_TOKENS: usize = 4;

/// Filter for encyclopedic corpora.
///
/// Rejects:
/// * the document boundary marker,
/// * blank or whitespace-only lines,
/// * lines with fewer than `min_tokens` whitespace-separated tokens
///   (titles, headings, and other structural noise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncyclopediaFilter {
    /// The document boundary marker.
    pub marker: String,

    /// The minimum number of whitespace tokens in a kept line.
    pub min_tokens: usize,
}

impl Default for EncyclopediaFilter {
    fn default() -> Self {
        Self {
            marker: DOCUMENT_END_MARKER.to_string(),
            min_tokens: MIN_ENCYCLOPEDIA_TOKENS,
        }
    }
}

impl EncyclopediaFilter {
    /// Set the minimum number of whitespace tokens in a kept line.
    pub fn with_min_tokens(
        self,
        min_tokens: usize,
    ) -> Self {
        Self { min_tokens, ..self }
    }

    /// Set the document boundary marker.
    pub fn with_marker<S: Into<String>>(
        self,
        marker: S,
    ) -> Self {
        Self {
            marker: marker.into(),
            ..self
        }
    }
}

impl LineFilter for EncyclopediaFilter {
    fn accept(
        &self,
        line: &str,
    ) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == self.marker {
            return false;
        }
        trimmed.split_whitespace().count() >= self.min_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encyclopedia_filter() {
        let filter = EncyclopediaFilter::default();

        assert!(!filter.accept(DOCUMENT_END_MARKER));
        assert!(!filter.accept("---END.OF.DOCUMENT---\r"));
        assert!(!filter.accept(""));
        assert!(!filter.accept(" \t "));
        assert!(!filter.accept("Anarchism"));
        assert!(!filter.accept("History of anarchism"));

        assert!(filter.accept("Anarchism is a political philosophy."));
        assert!(filter.accept("one two three four"));
    }

    #[test]
    fn test_options() {
        let filter = EncyclopediaFilter::default()
            .with_min_tokens(1)
            .with_marker("<eod>");

        assert!(filter.accept("Title"));
        assert!(filter.accept(DOCUMENT_END_MARKER));
        assert!(!filter.accept("<eod>"));
    }
}
