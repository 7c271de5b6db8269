use std::path::PathBuf;

use lmcorpus::{
    paths::DATA_DIR_RESOLVER,
    pipeline::{CorpusPipeline, CorpusPipelineOptions, DEFAULT_PROGRESS_INTERVAL, PipelineReport},
    tokenize::DEFAULT_WORD_PATTERN,
};

use crate::presets::{ContextPreset, FilterKind, TokenizerKind};

/// Corpus pipeline argument group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Which context to process.
    #[arg(short, long, value_enum, default_value = "code")]
    pub context: ContextPreset,

    /// The corpus file; defaults to the context's corpus in the dataset directory.
    #[arg(short, long, default_value = None)]
    pub input: Option<PathBuf>,

    /// Dataset directory; else `$LMCORPUS_DATA_DIR`; else `/var/datasets/text`.
    #[arg(long, default_value = None)]
    pub data_dir: Option<PathBuf>,

    /// Output directory; defaults to the directory of the input.
    #[arg(short, long, default_value = None)]
    pub output_dir: Option<PathBuf>,

    /// Keep the `top_k` most frequent words in the vocabulary.
    #[arg(short = 'k', long)]
    pub top_k: usize,

    /// Stop once more than this many lines have been read; `0` means no cap.
    #[arg(long, default_value = None)]
    pub stop_after: Option<u64>,

    /// Override the context's tokenizer.
    #[arg(long, value_enum, default_value = None)]
    pub tokenizer: Option<TokenizerKind>,

    /// Word pattern for the regex tokenizer.
    #[arg(long, default_value_t = DEFAULT_WORD_PATTERN.to_string())]
    pub word_pattern: String,

    /// Override the context's line filter.
    #[arg(long, value_enum, default_value = None)]
    pub filter: Option<FilterKind>,

    /// Lines between progress reports; 0 disables them.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,
}

impl CorpusArgs {
    /// The corpus file to read.
    pub fn input_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }
        let data_dir = DATA_DIR_RESOLVER
            .resolve(self.data_dir.as_ref())
            .ok_or("no dataset directory; pass --data-dir or --input")?;
        Ok(data_dir.join(self.context.input_file()))
    }

    /// The effective tokenizer.
    pub fn tokenizer_kind(&self) -> TokenizerKind {
        self.tokenizer
            .unwrap_or_else(|| self.context.tokenizer_kind())
    }

    /// The effective filter.
    pub fn filter_kind(&self) -> FilterKind {
        self.filter.unwrap_or_else(|| self.context.filter_kind())
    }

    /// The pipeline options.
    pub fn pipeline_options(&self) -> CorpusPipelineOptions {
        CorpusPipelineOptions::new(self.context.label(), self.top_k)
            .with_output_dir(self.output_dir.clone())
            .with_stop_after(self.stop_after.filter(|&cap| cap > 0))
            .with_progress_interval(self.progress_interval)
    }

    /// Run the corpus pipeline, and print the statistics.
    pub fn run_pipeline(&self) -> Result<PipelineReport, Box<dyn std::error::Error>> {
        let input = self.input_path()?;
        let tokenizer = self.tokenizer_kind().build(&self.word_pattern)?;
        let filter = self.filter_kind().build();

        log::info!(
            "Processing {} corpus: {}",
            self.context.label(),
            input.display()
        );
        log::info!(
            "tokenizer: {:?}; filter: {:?}",
            self.tokenizer_kind(),
            self.filter_kind()
        );

        let report = CorpusPipeline::new(self.pipeline_options(), tokenizer, filter).run(&input)?;

        let ingest = &report.ingest;
        if ingest.source.invalid_lines > 0 || ingest.source.skipped_members > 0 {
            log::warn!(
                "Skipped {} invalid lines and {} invalid archive members",
                ingest.source.invalid_lines,
                ingest.source.skipped_members
            );
        }

        println!("Statistics for {}:", self.context.label());
        println!("{}", report.stats);
        println!("  corpus:             {}", report.corpus_path.display());
        println!("  vocabulary:         {}", report.vocab_path.display());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[clap(flatten)]
        corpus: CorpusArgs,
    }

    #[test]
    fn test_preset_defaults() {
        let args = TestArgs::try_parse_from([
            "test",
            "-c",
            "wikipedia",
            "--data-dir",
            "/data/text",
            "-k",
            "500",
        ])
        .unwrap()
        .corpus;

        assert_eq!(
            args.input_path().unwrap(),
            PathBuf::from("/data/text/WestburyLab.Wikipedia.Corpus.txt.bz2")
        );
        assert_eq!(args.tokenizer_kind(), TokenizerKind::Code);
        assert_eq!(args.filter_kind(), FilterKind::Encyclopedia);

        let options = args.pipeline_options();
        assert_eq!(options.context, "wikipedia");
        assert_eq!(options.top_k, 500);
        assert_eq!(options.output_dir, None);
        assert_eq!(options.stop_after, None);
    }

    #[test]
    fn test_overrides() {
        let args = TestArgs::try_parse_from([
            "test",
            "--context",
            "upstream",
            "--input",
            "/tmp/corpus.txt",
            "--output-dir",
            "/tmp/out",
            "--top-k",
            "10",
            "--stop-after",
            "3",
            "--tokenizer",
            "code-run-together",
            "--filter",
            "encyclopedia",
        ])
        .unwrap()
        .corpus;

        assert_eq!(args.input_path().unwrap(), PathBuf::from("/tmp/corpus.txt"));
        assert_eq!(args.tokenizer_kind(), TokenizerKind::CodeRunTogether);
        assert_eq!(args.filter_kind(), FilterKind::Encyclopedia);

        let options = args.pipeline_options();
        assert_eq!(options.context, "upstream");
        assert_eq!(options.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(options.stop_after, Some(3));
    }

    #[test]
    fn test_zero_stop_after_is_uncapped() {
        let args =
            TestArgs::try_parse_from(["test", "-c", "code", "--top-k", "10", "--stop-after", "0"])
                .unwrap();
        assert_eq!(args.corpus.stop_after, Some(0));
        assert_eq!(args.corpus.pipeline_options().stop_after, None);
    }

    #[test]
    fn test_top_k_is_required() {
        assert!(TestArgs::try_parse_from(["test", "-c", "code"]).is_err());
    }
}
