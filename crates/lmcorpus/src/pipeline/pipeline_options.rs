//! # Pipeline Options

use std::path::PathBuf;

use crate::{
    counting::WordCounterOptions,
    filter::LineFilter,
    pipeline::CorpusPipeline,
    tokenize::LineTokenizer,
};

/// Lines between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Options for [`CorpusPipeline`].
#[derive(Debug, Clone)]
pub struct CorpusPipelineOptions {
    /// The context label; names the output artifacts.
    pub context: String,

    /// The vocabulary size.
    pub top_k: usize,

    /// Where artifacts are written.
    ///
    /// When `None`, the directory containing the input is used.
    pub output_dir: Option<PathBuf>,

    /// Stop once more than this many lines have been read.
    ///
    /// Rejected lines count; `Some(3)` reads 4 lines, and `Some(0)` reads 1.
    pub stop_after: Option<u64>,

    /// Lines between progress reports; `0` disables them.
    pub progress_interval: u64,

    /// Options for the word counter.
    pub counter: WordCounterOptions,
}

impl CorpusPipelineOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `context` - the context label.
    /// * `top_k` - the vocabulary size.
    pub fn new<S: Into<String>>(
        context: S,
        top_k: usize,
    ) -> Self {
        Self {
            context: context.into(),
            top_k,
            output_dir: None,
            stop_after: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            counter: WordCounterOptions::default(),
        }
    }

    /// Sets the vocabulary size.
    pub fn with_top_k(
        self,
        top_k: usize,
    ) -> Self {
        Self { top_k, ..self }
    }

    /// Sets the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(
        self,
        output_dir: Option<P>,
    ) -> Self {
        Self {
            output_dir: output_dir.map(Into::into),
            ..self
        }
    }

    /// Sets the line cap.
    pub fn with_stop_after(
        self,
        stop_after: Option<u64>,
    ) -> Self {
        Self { stop_after, ..self }
    }

    /// Sets the progress interval.
    pub fn with_progress_interval(
        self,
        progress_interval: u64,
    ) -> Self {
        Self {
            progress_interval,
            ..self
        }
    }

    /// Sets the expected number of distinct tokens.
    pub fn with_capacity_hint(
        self,
        capacity_hint: usize,
    ) -> Self {
        Self {
            counter: self.counter.with_capacity_hint(capacity_hint),
            ..self
        }
    }

    /// Initializes a [`CorpusPipeline`] from these options.
    pub fn init<T, F>(
        self,
        tokenizer: T,
        filter: F,
    ) -> CorpusPipeline<T, F>
    where
        T: LineTokenizer,
        F: LineFilter,
    {
        CorpusPipeline::new(self, tokenizer, filter)
    }
}
