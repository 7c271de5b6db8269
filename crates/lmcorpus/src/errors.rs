//! # Error Types

use std::path::PathBuf;

use crate::source::ContainerKind;

/// Errors from lmcorpus operations.
#[derive(Debug, thiserror::Error)]
pub enum LmCorpusError {
    /// The corpus file could not be opened.
    #[error("failed to open corpus {}: {source}", path.display())]
    Open {
        /// The corpus path.
        path: PathBuf,

        /// The underlying error.
        source: std::io::Error,
    },

    /// The top-level compression stream of the corpus is unreadable.
    #[error("corrupt {kind} corpus {}: {source}", path.display())]
    CorruptInput {
        /// The corpus path.
        path: PathBuf,

        /// The container kind inferred for the path.
        kind: ContainerKind,

        /// The underlying error.
        source: std::io::Error,
    },

    /// A tar header or member framing is invalid.
    #[error("corrupt tar archive: {0}")]
    CorruptArchive(String),

    /// A tokenizer pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// No tokens were observed; statistics cannot be computed.
    #[error("corpus is empty: no tokens were observed")]
    EmptyCorpus,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for lmcorpus operations.
pub type LMResult<T> = core::result::Result<T, LmCorpusError>;
