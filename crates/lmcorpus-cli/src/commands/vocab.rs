use crate::{
    corpus_args::CorpusArgs,
    logging::{DEFAULT_VERBOSITY, LogArgs},
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub corpus: CorpusArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(DEFAULT_VERBOSITY)?;

        self.corpus.run_pipeline()?;

        Ok(())
    }
}
