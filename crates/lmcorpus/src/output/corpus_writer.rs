//! # Normalized Corpus Writer

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use flate2::{Compression, write::GzEncoder};

use crate::LMResult;

/// Writes the normalized training corpus to a gzip sink.
///
/// Each accepted line becomes its tokens joined by a single space,
/// lowercased, and terminated by `\n`. Empty tokens are dropped; an empty
/// token list yields a bare `\n`. The external estimator reads this format as-is.
///
/// Call [`NormalizedCorpusWriter::finish`] to flush and write the gzip
/// trailer; dropping the writer makes a best-effort attempt.
pub struct NormalizedCorpusWriter<W: Write = BufWriter<File>> {
    encoder: GzEncoder<W>,
    line: String,
}

impl NormalizedCorpusWriter {
    /// Create (or truncate) the corpus file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> LMResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> NormalizedCorpusWriter<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self {
            encoder: GzEncoder::new(inner, Compression::default()),
            line: String::new(),
        }
    }

    /// Write one normalized line.
    pub fn write_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
    ) -> LMResult<()> {
        self.line.clear();
        for token in tokens {
            let token: &str = token.as_ref();
            if token.is_empty() {
                continue;
            }
            if !self.line.is_empty() {
                self.line.push(' ');
            }
            self.line.push_str(token);
        }
        let mut normalized = self.line.to_lowercase();
        normalized.push('\n');

        self.encoder.write_all(normalized.as_bytes())?;
        Ok(())
    }

    /// Write the gzip trailer, flush, and release the inner writer.
    pub fn finish(self) -> LMResult<W> {
        let mut inner = self.encoder.finish()?;
        inner.flush()?;
        Ok(inner)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::MultiGzDecoder;

    use super::*;

    fn gunzip(data: &[u8]) -> String {
        let mut text = String::new();
        MultiGzDecoder::new(data).read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_write_lines() {
        let mut writer = NormalizedCorpusWriter::new(Vec::new());
        writer.write_tokens(&["The", "Cat", "sat"]).unwrap();
        writer.write_tokens::<&str>(&[]).unwrap();
        writer
            .write_tokens(&["dog".to_string(), "RAN".to_string()])
            .unwrap();
        writer.write_tokens(&["", "a", "", "b", ""]).unwrap();

        let data = writer.finish().unwrap();
        assert_eq!(gunzip(&data), "the cat sat\n\ndog ran\na b\n");
    }

    #[test]
    fn test_no_lines_is_valid_gzip() {
        let writer = NormalizedCorpusWriter::new(Vec::new());
        let data = writer.finish().unwrap();
        assert!(!data.is_empty());
        assert_eq!(gunzip(&data), "");
    }

    #[test]
    fn test_create_file() {
        tempdir::TempDir::new("corpus_writer")
            .and_then(|dir| {
                let path = dir.path().join("ctx-lower.txt.gz");

                let mut writer = NormalizedCorpusWriter::create(&path).unwrap();
                writer.write_tokens(&["hello", "world"]).unwrap();
                writer.finish().unwrap();

                let data = std::fs::read(&path)?;
                assert_eq!(gunzip(&data), "hello world\n");

                Ok(())
            })
            .unwrap();
    }
}
