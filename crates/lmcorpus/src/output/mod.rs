//! # Pipeline Artifacts
//!
//! The normalized corpus writer, and the naming of the files a run produces.

mod artifact_paths;
mod corpus_writer;

#[doc(inline)]
pub use artifact_paths::{corpus_path, vocab_path};
#[doc(inline)]
pub use corpus_writer::NormalizedCorpusWriter;
