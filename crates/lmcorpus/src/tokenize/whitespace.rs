//! # Whitespace Tokenizer

use crate::tokenize::LineTokenizer;

/// The default tokenizer: lowercase the line and split on runs of whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl LineTokenizer for WhitespaceTokenizer {
    fn tokenize(
        &self,
        line: &str,
    ) -> Vec<String> {
        line.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer;

        assert_eq!(tokenizer.tokenize("The cat sat"), vec!["the", "cat", "sat"]);
        assert_eq!(
            tokenizer.tokenize("  Multiple\t\tspaces \u{2003}here \n"),
            vec!["multiple", "spaces", "here"]
        );
        assert_eq!(tokenizer.tokenize("Don't STOP."), vec!["don't", "stop."]);
        assert_eq!(tokenizer.tokenize("CAFÉ"), vec!["café"]);
    }

    #[test]
    fn test_blank_lines() {
        let tokenizer = WhitespaceTokenizer;
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t ").is_empty());
    }
}
