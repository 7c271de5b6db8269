//! # Regex Tokenizer

use regex::Regex;

use crate::{LMResult, tokenize::LineTokenizer};

/// The default [`RegexTokenizer`] pattern.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

/// Tokenizer which lowercases a line, and yields each match of a regex pattern.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    /// Compile a new regex tokenizer.
    ///
    /// ## Errors
    /// [`crate::LmCorpusError::Pattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> LMResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// A tokenizer using [`DEFAULT_WORD_PATTERN`].
    pub fn words() -> LMResult<Self> {
        Self::new(DEFAULT_WORD_PATTERN)
    }

    /// Get the pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl LineTokenizer for RegexTokenizer {
    fn tokenize(
        &self,
        line: &str,
    ) -> Vec<String> {
        let line = line.to_lowercase();
        self.regex
            .find_iter(&line)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LmCorpusError;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::words().unwrap();
        assert_eq!(tokenizer.pattern(), DEFAULT_WORD_PATTERN);
        assert_eq!(
            tokenizer.tokenize("Hello, World! It's 2024."),
            vec!["hello", "world", "it", "s", "2024"]
        );
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::new(r"\S+").unwrap();
        assert_eq!(tokenizer.tokenize("Don't STOP."), vec!["don't", "stop."]);
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            RegexTokenizer::new(r"("),
            Err(LmCorpusError::Pattern(_))
        ));
    }
}
