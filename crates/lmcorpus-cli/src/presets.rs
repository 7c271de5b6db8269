use lmcorpus::{
    filter::{BuiltinFilter, EncyclopediaFilter},
    tokenize::{BuiltinTokenizer, CodeTokenizer, RegexTokenizer, WhitespaceTokenizer},
};

/// The named corpus contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContextPreset {
    /// Python source code.
    Code,

    /// The Westbury Lab Wikipedia dump.
    Wikipedia,

    /// The `LibriSpeech` normalized LM corpus.
    Upstream,
}

impl ContextPreset {
    /// The context label; names the output artifacts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Wikipedia => "wikipedia",
            Self::Upstream => "upstream",
        }
    }

    /// The default input, relative to the dataset directory.
    pub fn input_file(self) -> &'static str {
        match self {
            Self::Code => "python-corpus.tar.gz",
            Self::Wikipedia => "WestburyLab.Wikipedia.Corpus.txt.bz2",
            Self::Upstream => "librispeech-lm-norm.txt.gz",
        }
    }

    /// The default tokenizer.
    pub fn tokenizer_kind(self) -> TokenizerKind {
        match self {
            Self::Code => TokenizerKind::CodeRunTogether,
            Self::Wikipedia => TokenizerKind::Code,
            Self::Upstream => TokenizerKind::Whitespace,
        }
    }

    /// The default filter.
    pub fn filter_kind(self) -> FilterKind {
        match self {
            Self::Wikipedia => FilterKind::Encyclopedia,
            Self::Code | Self::Upstream => FilterKind::None,
        }
    }
}

/// Tokenizer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenizerKind {
    /// Lowercase, split on whitespace.
    Whitespace,

    /// Word and punctuation runs.
    Code,

    /// Word and punctuation runs, splitting run-together identifiers.
    CodeRunTogether,

    /// Lowercase, regex matches; see `--word-pattern`.
    Regex,
}

impl TokenizerKind {
    /// Build the tokenizer.
    pub fn build(
        self,
        word_pattern: &str,
    ) -> lmcorpus::LMResult<BuiltinTokenizer> {
        Ok(match self {
            Self::Whitespace => BuiltinTokenizer::Whitespace(WhitespaceTokenizer),
            Self::Code => BuiltinTokenizer::Code(CodeTokenizer::new(false)),
            Self::CodeRunTogether => BuiltinTokenizer::Code(CodeTokenizer::new(true)),
            Self::Regex => BuiltinTokenizer::Regex(RegexTokenizer::new(word_pattern)?),
        })
    }
}

/// Line filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterKind {
    /// Accept every line.
    None,

    /// Drop document markers, blank lines, and short lines.
    Encyclopedia,
}

impl FilterKind {
    /// Build the filter.
    pub fn build(self) -> BuiltinFilter {
        match self {
            Self::None => BuiltinFilter::AcceptAll,
            Self::Encyclopedia => BuiltinFilter::Encyclopedia(EncyclopediaFilter::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use lmcorpus::{filter::LineFilter, tokenize::LineTokenizer};

    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ContextPreset::Code.label(), "code");
        assert_eq!(ContextPreset::Code.input_file(), "python-corpus.tar.gz");
        assert_eq!(
            ContextPreset::Code.tokenizer_kind(),
            TokenizerKind::CodeRunTogether
        );
        assert_eq!(ContextPreset::Code.filter_kind(), FilterKind::None);

        assert_eq!(
            ContextPreset::Wikipedia.input_file(),
            "WestburyLab.Wikipedia.Corpus.txt.bz2"
        );
        assert_eq!(ContextPreset::Wikipedia.filter_kind(), FilterKind::Encyclopedia);

        assert_eq!(ContextPreset::Upstream.input_file(), "librispeech-lm-norm.txt.gz");
        assert_eq!(
            ContextPreset::Upstream.tokenizer_kind(),
            TokenizerKind::Whitespace
        );
    }

    #[test]
    fn test_build_tokenizers() {
        let tokenizer = TokenizerKind::CodeRunTogether.build(r"\w+").unwrap();
        assert_eq!(tokenizer.tokenize("fooBar"), vec!["foo", "bar"]);

        let tokenizer = TokenizerKind::Whitespace.build(r"\w+").unwrap();
        assert_eq!(tokenizer.tokenize("fooBar baz"), vec!["foobar", "baz"]);

        let tokenizer = TokenizerKind::Regex.build(r"[a-z]+").unwrap();
        assert_eq!(tokenizer.tokenize("Ab1cd"), vec!["ab", "cd"]);

        assert!(TokenizerKind::Regex.build(r"(").is_err());
    }

    #[test]
    fn test_build_filters() {
        assert!(FilterKind::None.build().accept(""));
        assert!(!FilterKind::Encyclopedia.build().accept(""));
    }
}
