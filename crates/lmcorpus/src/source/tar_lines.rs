//! # Tar Member Line Reader
//!
//! Yields the UTF-8 lines of each regular-file member of a tar stream,
//! in archive order.
//!
//! Member framing (GNU long names, pax records, sparse members, padding)
//! is left to [`tar::Archive::entries`]; this module only splits member
//! data into lines.

use std::io::{self, BufReader, Read};

use crate::{
    LMResult,
    LmCorpusError,
    source::{SourceStats, text_lines::read_raw_line},
};

fn corrupt(err: io::Error) -> LmCorpusError {
    LmCorpusError::CorruptArchive(err.to_string())
}

/// The member currently being read.
struct MemberLines<'a, R: 'a + Read> {
    name: String,
    reader: BufReader<tar::Entry<'a, R>>,
    line_number: u64,
}

/// Lazy iterator over the UTF-8 lines of the regular-file members of a tar archive.
///
/// * Non-file members (directories, links, ...) are skipped silently.
/// * A member containing invalid UTF-8 is abandoned at the first bad line
///   with a warning naming the member; lines already yielded stay yielded.
/// * Invalid headers or truncated framing are fatal.
pub struct TarLines<'a, R: 'a + Read> {
    entries: tar::Entries<'a, R>,
    member: Option<MemberLines<'a, R>>,
    buf: Vec<u8>,
    finished: bool,
    stats: SourceStats,
}

impl<'a, R: 'a + Read> TarLines<'a, R> {
    /// Walk the members of an archive.
    ///
    /// ## Errors
    /// [`LmCorpusError::CorruptArchive`] if the archive has already been walked.
    pub fn new(archive: &'a mut tar::Archive<R>) -> LMResult<Self> {
        Ok(Self {
            entries: archive.entries().map_err(corrupt)?,
            member: None,
            buf: Vec::with_capacity(256),
            finished: false,
            stats: SourceStats::default(),
        })
    }

    /// Get the running read statistics.
    pub fn stats(&self) -> SourceStats {
        self.stats
    }

    /// Advance to the next regular-file member.
    ///
    /// ## Returns
    /// `false` at the end of the archive.
    fn next_member(&mut self) -> LMResult<bool> {
        for entry in self.entries.by_ref() {
            let entry = entry.map_err(corrupt)?;
            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();

            let entry_type = entry.header().entry_type();
            if !(entry_type.is_file() || entry_type.is_contiguous() || entry_type.is_gnu_sparse())
            {
                log::debug!("skipping non-file tar member {name}");
                continue;
            }

            self.stats.members += 1;
            self.member = Some(MemberLines {
                name,
                reader: BufReader::new(entry),
                line_number: 0,
            });
            return Ok(true);
        }
        Ok(false)
    }

    /// Read the next line of the current member.
    ///
    /// ## Returns
    /// `None` when the member is exhausted or abandoned.
    fn next_member_line(&mut self) -> LMResult<Option<String>> {
        let Some(member) = self.member.as_mut() else {
            return Ok(None);
        };

        if read_raw_line(&mut member.reader, &mut self.buf).map_err(corrupt)? == 0 {
            self.member = None;
            return Ok(None);
        }
        member.line_number += 1;

        match String::from_utf8(std::mem::take(&mut self.buf)) {
            Ok(line) => {
                self.stats.lines += 1;
                Ok(Some(line))
            }
            Err(err) => {
                self.buf = err.into_bytes();
                log::warn!(
                    "skipping tar member {}: line {} is not valid utf-8",
                    member.name,
                    member.line_number
                );
                // The archive skips the unread remainder on the next advance.
                self.member = None;
                self.stats.skipped_members += 1;
                Ok(None)
            }
        }
    }
}

impl<'a, R: 'a + Read> Iterator for TarLines<'a, R> {
    type Item = LMResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if self.member.is_none() {
                match self.next_member() {
                    Ok(true) => {}
                    Ok(false) => {
                        self.finished = true;
                        return None;
                    }
                    Err(err) => {
                        self.finished = true;
                        return Some(Err(err));
                    }
                }
            }

            match self.next_member_line() {
                Ok(Some(line)) => return Some(Ok(line)),
                Ok(None) => {}
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}
