//! # Corpus Sources
//!
//! Format-transparent line streaming over plain, gzip, bzip2, and
//! gzip-compressed tar corpora.
//!
//! The container kind is inferred from the file name; see
//! [`ContainerKind::from_path`].
//!
//! ```rust,no_run
//! use lmcorpus::source::open_corpus;
//!
//! let mut corpus = open_corpus("/var/datasets/text/python-corpus.tar.gz")?;
//! for line in corpus.lines()? {
//!     let line = line?;
//!     println!("{line}");
//! }
//! # Ok::<(), lmcorpus::LmCorpusError>(())
//! ```

mod container_kind;
mod corpus_source;
mod tar_lines;
mod text_lines;

#[doc(inline)]
pub use container_kind::ContainerKind;
#[doc(inline)]
pub use corpus_source::{CorpusLines, CorpusReader, CorpusSource, open_corpus};
#[doc(inline)]
pub use tar_lines::TarLines;
#[doc(inline)]
pub use text_lines::TextLines;

/// Read statistics for a line source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Lines yielded.
    pub lines: u64,

    /// Lines skipped because they were not valid UTF-8.
    pub invalid_lines: u64,

    /// Regular-file archive members entered.
    pub members: u64,

    /// Archive members abandoned because they were not valid UTF-8.
    pub skipped_members: u64,
}
