//! # `lmcorpus` Corpus Preparation for N-Gram Language Models
//!
//! This crate streams large (possibly compressed or archived) text corpora,
//! normalizes and tokenizes each line, counts word frequencies, writes a
//! lowercase training corpus, and selects a bounded top-k vocabulary with
//! coverage statistics.
//!
//! The resulting artifacts are consumed by an external n-gram estimator;
//! see the `lmcorpus-kenlm` crate for driving the `KenLM` tool-chain.
//!
//! See:
//! * [`source`] to open a corpus and iterate its lines.
//! * [`tokenize`] for [`tokenize::LineTokenizer`] implementations.
//! * [`filter`] for [`filter::LineFilter`] implementations.
//! * [`counting`] for the word frequency accumulator.
//! * [`vocab`] for top-k vocabulary extraction and statistics.
//! * [`output`] for the normalized corpus writer.
//! * [`pipeline`] to run the whole thing.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::CommonHash{*}`` type alias machinery.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lmcorpus::{
//!     filter::AcceptAll,
//!     pipeline::{CorpusPipeline, CorpusPipelineOptions},
//!     tokenize::WhitespaceTokenizer,
//! };
//!
//! let options = CorpusPipelineOptions::new("upstream", 50_000)
//!     .with_output_dir(Some("/tmp/lm"));
//!
//! let report = CorpusPipeline::new(options, WhitespaceTokenizer, AcceptAll)
//!     .run("/var/datasets/text/librispeech-lm-norm.txt.gz")?;
//!
//! println!("{}", report.stats);
//! # Ok::<(), lmcorpus::LmCorpusError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod counting;
pub mod filter;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod source;
pub mod tokenize;
pub mod types;
pub mod vocab;

mod errors;

#[doc(inline)]
pub use errors::{LMResult, LmCorpusError};
