//! # Code-Aware Tokenizer
//!
//! Segments source-code-like text into word runs and punctuation runs;
//! optionally guessing the words of run-together identifiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::tokenize::LineTokenizer;

/// Word runs, or runs of punctuation.
const SEGMENT_PATTERN: &str = r"\w+|[^\w\s]+";

static SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEGMENT_PATTERN).expect("regex pattern compilation failed"));

/// Split a run-together identifier into its guessed words.
///
/// Boundaries are placed at:
/// * underscores (dropped),
/// * lower to upper case changes (`fooBar`),
/// * the last capital of an acronym followed by a lowercase letter (`HTTPServer`),
/// * letter/digit changes (`utf8`).
pub fn split_run_together(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start: Option<usize> = None;

    for (pos, &(idx, c)) in chars.iter().enumerate() {
        if c == '_' {
            if let Some(s) = start.take() {
                parts.push(&word[s..idx]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(idx);
            continue;
        };

        // `start` is only set after a non-underscore char.
        let prev = chars[pos - 1].1;
        let next = chars.get(pos + 1).map(|&(_, c)| c);

        let boundary = (prev.is_lowercase() && c.is_uppercase())
            || (prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase))
            || (prev.is_alphabetic() && c.is_numeric())
            || (prev.is_numeric() && c.is_alphabetic());

        if boundary {
            parts.push(&word[s..idx]);
            start = Some(idx);
        }
    }

    if let Some(s) = start {
        parts.push(&word[s..]);
    }
    parts
}

/// Tokenizer for code-like and dictation corpora.
///
/// Word runs and punctuation runs become separate tokens; all tokens are lowercased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeTokenizer {
    /// Guess the words of run-together identifiers (`camelCase`, `snake_case`).
    pub split_run_together: bool,
}

impl CodeTokenizer {
    /// Create a new code tokenizer.
    pub fn new(split_run_together: bool) -> Self {
        Self { split_run_together }
    }
}

impl LineTokenizer for CodeTokenizer {
    fn tokenize(
        &self,
        line: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        for mat in SEGMENT_REGEX.find_iter(line) {
            let piece = mat.as_str();
            let is_word = piece
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');

            if self.split_run_together && is_word {
                tokens.extend(
                    split_run_together(piece)
                        .into_iter()
                        .map(str::to_lowercase),
                );
            } else {
                tokens.push(piece.to_lowercase());
            }
        }
        tokens
    }
}
