//! # Line Tokenizer Trait

/// Maps one raw line to an ordered sequence of normalized tokens.
///
/// Any `Fn(&str) -> Vec<String>` is a [`LineTokenizer`]; so externally
/// supplied tokenizers can be plugged in as closures.
pub trait LineTokenizer {
    /// Tokenize one line; the result may be empty.
    fn tokenize(
        &self,
        line: &str,
    ) -> Vec<String>;
}

impl<F> LineTokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(
        &self,
        line: &str,
    ) -> Vec<String> {
        self(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<T: LineTokenizer>(
        tokenizer: &T,
        line: &str,
    ) -> Vec<String> {
        tokenizer.tokenize(line)
    }

    #[test]
    fn test_closure_tokenizer() {
        let by_comma = |line: &str| -> Vec<String> {
            line.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        assert_eq!(run(&by_comma, "a, b,,c"), vec!["a", "b", "c"]);
        assert!(run(&by_comma, "").is_empty());
    }
}
