//! # UTF-8 Line Reader

use std::io::{self, BufRead};

use crate::{LMResult, source::SourceStats};

/// Strip a trailing `"\n"` or `"\r\n"` from a raw line buffer.
pub(crate) fn strip_line_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Read one raw line into `buf`, replacing its contents.
///
/// The line terminator is stripped.
///
/// ## Returns
/// The number of bytes consumed from the reader; `0` at end of stream.
pub(crate) fn read_raw_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<usize> {
    buf.clear();
    let n = reader.read_until(b'\n', buf)?;
    strip_line_terminator(buf);
    Ok(n)
}

/// Lazy iterator over the UTF-8 lines of a byte stream.
///
/// Lines are yielded without their terminators.
/// A line which is not valid UTF-8 is skipped with a warning;
/// an I/O error is yielded once, and is fatal to the caller.
pub struct TextLines<R: BufRead> {
    reader: R,
    label: String,
    buf: Vec<u8>,
    line_number: u64,
    stats: SourceStats,
}

impl<R: BufRead> TextLines<R> {
    /// Wrap a reader.
    ///
    /// ## Arguments
    /// * `reader` - the decoded byte stream.
    /// * `label` - a name for the stream, used in warnings.
    pub fn new<S: Into<String>>(
        reader: R,
        label: S,
    ) -> Self {
        Self {
            reader,
            label: label.into(),
            buf: Vec::with_capacity(256),
            line_number: 0,
            stats: SourceStats::default(),
        }
    }

    /// Get the running read statistics.
    pub fn stats(&self) -> SourceStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = LMResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match read_raw_line(&mut self.reader, &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err.into())),
            }
            self.line_number += 1;

            match String::from_utf8(std::mem::take(&mut self.buf)) {
                Ok(line) => {
                    self.stats.lines += 1;
                    return Some(Ok(line));
                }
                Err(err) => {
                    self.buf = err.into_bytes();
                    self.stats.invalid_lines += 1;
                    log::warn!(
                        "{}: skipping line {}; not valid utf-8",
                        self.label,
                        self.line_number
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_strip_line_terminator() {
        let mut buf = b"abc\r\n".to_vec();
        strip_line_terminator(&mut buf);
        assert_eq!(buf, b"abc");

        let mut buf = b"abc\n".to_vec();
        strip_line_terminator(&mut buf);
        assert_eq!(buf, b"abc");

        let mut buf = b"abc\r".to_vec();
        strip_line_terminator(&mut buf);
        assert_eq!(buf, b"abc\r");

        let mut buf = Vec::new();
        strip_line_terminator(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_text_lines() {
        let reader = Cursor::new(b"one two\n\nthree\r\nfour".to_vec());
        let mut lines = TextLines::new(reader, "test");

        let collected: Vec<String> = lines.by_ref().map(|l| l.unwrap()).collect();
        assert_eq!(collected, vec!["one two", "", "three", "four"]);

        assert_eq!(
            lines.stats(),
            SourceStats {
                lines: 4,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_invalid_utf8_lines_are_skipped() {
        let reader = Cursor::new(b"good\n\xff\xfe bad\nalso good\n".to_vec());
        let mut lines = TextLines::new(reader, "test");

        let collected: Vec<String> = lines.by_ref().map(|l| l.unwrap()).collect();
        assert_eq!(collected, vec!["good", "also good"]);

        let stats = lines.stats();
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.invalid_lines, 1);
    }

    #[test]
    fn test_empty_stream() {
        let mut lines = TextLines::new(Cursor::new(Vec::new()), "empty");
        assert!(lines.next().is_none());
        assert_eq!(lines.stats(), SourceStats::default());
    }
}
