//! # Corpus Pipeline
//!
//! Drives one pass over a corpus:
//! source lines are filtered, tokenized, counted, and written to the
//! normalized corpus; the top-k vocabulary and its statistics are
//! extracted at the end.

mod corpus_pipeline;
mod pipeline_options;

#[doc(inline)]
pub use corpus_pipeline::{CorpusPipeline, IngestStats, PipelineReport};
#[doc(inline)]
pub use pipeline_options::{CorpusPipelineOptions, DEFAULT_PROGRESS_INTERVAL};
