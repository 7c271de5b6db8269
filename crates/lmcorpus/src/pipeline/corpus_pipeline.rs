//! # Corpus Pipeline Driver

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    LMResult,
    counting::WordCounter,
    filter::LineFilter,
    output::{NormalizedCorpusWriter, corpus_path, vocab_path},
    pipeline::CorpusPipelineOptions,
    source::{CorpusSource, SourceStats},
    tokenize::LineTokenizer,
    vocab::{CorpusStatistics, TopKVocab, extract_top_k, save_vocab_path},
};

/// Line accounting for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read from the source; accepted or rejected.
    pub lines_read: u64,

    /// Lines passed by the filter.
    pub lines_accepted: u64,

    /// Lines rejected by the filter.
    pub lines_rejected: u64,

    /// Source-level statistics; decode skips happen below the pipeline.
    pub source: SourceStats,
}

/// The results of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The normalized corpus file.
    pub corpus_path: PathBuf,

    /// The vocabulary file.
    pub vocab_path: PathBuf,

    /// The top-k vocabulary.
    pub vocab: TopKVocab,

    /// The corpus statistics.
    pub stats: CorpusStatistics,

    /// The line accounting.
    pub ingest: IngestStats,
}

/// Single-pass corpus ingestion and vocabulary extraction.
///
/// # Parameters
/// * `T` - the line tokenizer.
/// * `F` - the line filter.
pub struct CorpusPipeline<T, F>
where
    T: LineTokenizer,
    F: LineFilter,
{
    /// The config options.
    pub options: CorpusPipelineOptions,

    tokenizer: T,
    filter: F,
}

impl<T, F> CorpusPipeline<T, F>
where
    T: LineTokenizer,
    F: LineFilter,
{
    /// Create a new pipeline.
    pub fn new(
        options: CorpusPipelineOptions,
        tokenizer: T,
        filter: F,
    ) -> Self {
        Self {
            options,
            tokenizer,
            filter,
        }
    }

    /// The directory artifacts are written to for a given input.
    ///
    /// The configured output directory; else the (absolute) directory
    /// containing `input`.
    pub fn output_dir_for<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> LMResult<PathBuf> {
        if let Some(dir) = &self.options.output_dir {
            return Ok(dir.clone());
        }
        let input = std::path::absolute(input.as_ref())?;
        Ok(input.parent().map(Path::to_path_buf).unwrap_or_default())
    }

    /// Run the pipeline over a corpus file.
    ///
    /// ## Errors
    /// * [`crate::LmCorpusError::Open`] / [`crate::LmCorpusError::CorruptInput`]
    ///   if the corpus cannot be opened.
    /// * any read or write error met during ingestion.
    /// * [`crate::LmCorpusError::EmptyCorpus`] if no tokens were observed.
    pub fn run<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> LMResult<PipelineReport> {
        let input = input.as_ref();
        let output_dir = self.output_dir_for(input)?;

        let mut reader = CorpusSource::new(input).open()?;
        let mut lines = reader.lines()?;
        let mut report = self.run_lines(&mut lines, output_dir)?;
        report.ingest.source = lines.stats();

        Ok(report)
    }

    /// Run the pipeline over a line stream.
    ///
    /// The normalized corpus is finished, with its gzip trailer, before any
    /// ingestion error is returned. The vocabulary file is only written once
    /// the statistics succeed.
    pub fn run_lines<I, P>(
        &self,
        lines: I,
        output_dir: P,
    ) -> LMResult<PipelineReport>
    where
        I: IntoIterator<Item = LMResult<String>>,
        P: AsRef<Path>,
    {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let corpus_path = corpus_path(output_dir, &self.options.context);
        let vocab_path = vocab_path(output_dir, &self.options.context, self.options.top_k);

        log::info!("Writing normalized corpus: {}", corpus_path.display());
        let mut writer = NormalizedCorpusWriter::create(&corpus_path)?;
        let mut counter: WordCounter = self.options.counter.clone().init();

        let ingested = self.ingest(lines, &mut counter, &mut writer);
        let finished = writer.finish();
        let ingest = ingested?;
        finished?;

        log::info!(
            "Read {} lines: {} accepted, {} rejected",
            ingest.lines_read,
            ingest.lines_accepted,
            ingest.lines_rejected
        );

        let table = counter.release();
        log::info!(
            "Selecting top {} of {} unique words",
            self.options.top_k,
            table.len()
        );
        let (vocab, stats) = extract_top_k(&table, self.options.top_k)?;

        save_vocab_path(&vocab, &vocab_path)?;
        log::info!("Wrote vocabulary: {}", vocab_path.display());

        Ok(PipelineReport {
            corpus_path,
            vocab_path,
            vocab,
            stats,
            ingest,
        })
    }

    fn ingest<I>(
        &self,
        lines: I,
        counter: &mut WordCounter,
        writer: &mut NormalizedCorpusWriter,
    ) -> LMResult<IngestStats>
    where
        I: IntoIterator<Item = LMResult<String>>,
    {
        let interval = self.options.progress_interval;
        let mut stats = IngestStats::default();

        for line in lines {
            let line = line?;
            stats.lines_read += 1;

            let report_progress = interval > 0 && stats.lines_read % interval == 0;

            if self.filter.accept(&line) {
                let tokens = self.tokenizer.tokenize(&line);
                counter.observe(&tokens);
                writer.write_tokens(&tokens)?;
                stats.lines_accepted += 1;

                if report_progress {
                    log::debug!("{line:?} => {tokens:?}");
                }
            } else {
                stats.lines_rejected += 1;
            }

            if report_progress {
                log::info!(
                    "Processed {} lines; {} unique words",
                    stats.lines_read,
                    counter.table().len()
                );
            }

            if let Some(cap) = self.options.stop_after
                && stats.lines_read > cap
            {
                log::info!("Stopping after {} lines", stats.lines_read);
                break;
            }
        }

        Ok(stats)
    }
}
