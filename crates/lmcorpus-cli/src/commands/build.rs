use std::path::Path;

use lmcorpus_kenlm::ProcessExecutor;

use crate::{
    corpus_args::CorpusArgs,
    kenlm_args::KenlmArgs,
    logging::{DEFAULT_VERBOSITY, LogArgs},
};

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub corpus: CorpusArgs,

    #[clap(flatten)]
    pub kenlm: KenlmArgs,
}

impl BuildArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(DEFAULT_VERBOSITY)?;

        // Resolve the binaries before the corpus pass.
        let kenlm_bins = self.kenlm.kenlm_bins()?;

        let report = self.corpus.run_pipeline()?;

        let corpus_dir = report.corpus_path.parent().unwrap_or(Path::new("."));
        let options = self.kenlm.build_options(kenlm_bins, corpus_dir);

        log::info!("Building model in {}", options.output_dir.display());
        let artifacts = options
            .init(ProcessExecutor)
            .build(&report.corpus_path, &report.vocab)?;

        println!("  arpa:               {}", artifacts.arpa.display());
        println!("  filtered arpa:      {}", artifacts.filtered_arpa.display());
        println!("  binary:             {}", artifacts.binary.display());

        Ok(())
    }
}
