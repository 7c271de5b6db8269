//! # Corpus Source

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;

use crate::{
    LMResult,
    LmCorpusError,
    source::{ContainerKind, SourceStats, TarLines, TextLines},
};

/// Buffer size for decompressed corpus streams.
const STREAM_BUFFER_SIZE: usize = 128 * 1024;

/// A corpus file, and the container kind used to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    path: PathBuf,
    kind: ContainerKind,
}

impl CorpusSource {
    /// Describe a corpus file; the container kind is inferred from the file name.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let kind = ContainerKind::from_path(&path);
        Self { path, kind }
    }

    /// Override the inferred container kind.
    pub fn with_kind(
        self,
        kind: ContainerKind,
    ) -> Self {
        Self { kind, ..self }
    }

    /// Get the corpus path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the container kind.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    fn corrupt(
        &self,
        source: io::Error,
    ) -> LmCorpusError {
        LmCorpusError::CorruptInput {
            path: self.path.clone(),
            kind: self.kind,
            source,
        }
    }

    /// Fill the first buffer of a decoded stream, so that bad compression
    /// headers fail at open time rather than on the first line.
    fn prime<R: BufRead>(
        &self,
        mut reader: R,
    ) -> LMResult<R> {
        reader.fill_buf().map_err(|err| self.corrupt(err))?;
        Ok(reader)
    }

    /// Open the corpus for reading.
    ///
    /// ## Errors
    /// * [`LmCorpusError::Open`] if the file cannot be opened.
    /// * [`LmCorpusError::CorruptInput`] if the compression header is unreadable.
    pub fn open(&self) -> LMResult<CorpusReader> {
        let file = File::open(&self.path).map_err(|source| LmCorpusError::Open {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Opening {} corpus: {}", self.kind, self.path.display());

        let stream = match self.kind {
            ContainerKind::Plain => {
                ReaderStream::Text(Box::new(BufReader::with_capacity(STREAM_BUFFER_SIZE, file)))
            }
            ContainerKind::Gzip => ReaderStream::Text(Box::new(self.prime(
                BufReader::with_capacity(STREAM_BUFFER_SIZE, MultiGzDecoder::new(file)),
            )?)),
            ContainerKind::Bzip2 => ReaderStream::Text(Box::new(self.prime(
                BufReader::with_capacity(STREAM_BUFFER_SIZE, MultiBzDecoder::new(file)),
            )?)),
            ContainerKind::TarGz => {
                let reader: Box<dyn BufRead> = Box::new(self.prime(BufReader::with_capacity(
                    STREAM_BUFFER_SIZE,
                    MultiGzDecoder::new(file),
                ))?);
                ReaderStream::Tar(tar::Archive::new(reader))
            }
        };

        Ok(CorpusReader {
            label: self.path.display().to_string(),
            kind: self.kind,
            stream,
        })
    }
}

/// Open a corpus file, inferring its container kind from the file name.
pub fn open_corpus<P: AsRef<Path>>(path: P) -> LMResult<CorpusReader> {
    CorpusSource::new(path).open()
}

enum ReaderStream {
    Text(Box<dyn BufRead>),
    Tar(tar::Archive<Box<dyn BufRead>>),
}

/// An open [`CorpusSource`].
///
/// The underlying file is closed when this is dropped.
pub struct CorpusReader {
    label: String,
    kind: ContainerKind,
    stream: ReaderStream,
}

impl CorpusReader {
    /// The container kind being read.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Begin the lazy line sequence.
    ///
    /// The sequence is forward-only and not restartable; a second call
    /// continues a text stream where the first stopped.
    ///
    /// ## Errors
    /// [`LmCorpusError::CorruptArchive`] if a tar archive has already been walked.
    pub fn lines(&mut self) -> LMResult<CorpusLines<'_>> {
        let stream = match &mut self.stream {
            ReaderStream::Text(reader) => LineStream::Text(TextLines::new(reader, &self.label)),
            ReaderStream::Tar(archive) => LineStream::Tar(TarLines::new(archive)?),
        };
        Ok(CorpusLines {
            kind: self.kind,
            stream,
        })
    }
}

enum LineStream<'a> {
    Text(TextLines<&'a mut Box<dyn BufRead>>),
    Tar(TarLines<'a, Box<dyn BufRead>>),
}

/// The lazy line sequence of a [`CorpusReader`].
///
/// Finite, forward-only, and not restartable.
pub struct CorpusLines<'a> {
    kind: ContainerKind,
    stream: LineStream<'a>,
}

impl CorpusLines<'_> {
    /// The container kind being read.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Get the running read statistics.
    pub fn stats(&self) -> SourceStats {
        match &self.stream {
            LineStream::Text(lines) => lines.stats(),
            LineStream::Tar(lines) => lines.stats(),
        }
    }
}

impl Iterator for CorpusLines<'_> {
    type Item = LMResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.stream {
            LineStream::Text(lines) => lines.next(),
            LineStream::Tar(lines) => lines.next(),
        }
    }
}
