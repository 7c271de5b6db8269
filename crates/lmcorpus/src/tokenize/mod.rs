//! # Line Tokenizers
//!
//! A [`LineTokenizer`] maps one raw line to an ordered sequence of tokens.
//!
//! * [`WhitespaceTokenizer`] - the default; lowercase + whitespace split.
//! * [`CodeTokenizer`] - word/punctuation runs, optional run-together splitting.
//! * [`RegexTokenizer`] - lowercase + regex matches.
//!
//! Closures `Fn(&str) -> Vec<String>` are tokenizers too;
//! and [`BuiltinTokenizer`] wraps the builtin variants for runtime selection.

mod code;
mod line_tokenizer;
mod regex_tokenizer;
mod whitespace;

#[doc(inline)]
pub use code::{CodeTokenizer, split_run_together};
#[doc(inline)]
pub use line_tokenizer::LineTokenizer;
#[doc(inline)]
pub use regex_tokenizer::{DEFAULT_WORD_PATTERN, RegexTokenizer};
#[doc(inline)]
pub use whitespace::WhitespaceTokenizer;

/// Runtime selection over the builtin tokenizers.
#[derive(Debug, Clone)]
pub enum BuiltinTokenizer {
    /// See [`WhitespaceTokenizer`].
    Whitespace(WhitespaceTokenizer),

    /// See [`CodeTokenizer`].
    Code(CodeTokenizer),

    /// See [`RegexTokenizer`].
    Regex(RegexTokenizer),
}

impl Default for BuiltinTokenizer {
    fn default() -> Self {
        Self::Whitespace(WhitespaceTokenizer)
    }
}

impl LineTokenizer for BuiltinTokenizer {
    fn tokenize(
        &self,
        line: &str,
    ) -> Vec<String> {
        match self {
            Self::Whitespace(t) => t.tokenize(line),
            Self::Code(t) => t.tokenize(line),
            Self::Regex(t) => t.tokenize(line),
        }
    }
}
