mod build;
mod vocab;

/// Subcommands for lmcorpus
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Normalize a corpus, and extract its top-k vocabulary.
    Vocab(vocab::VocabArgs),

    /// Normalize a corpus, then build a `KenLM` model from it.
    Build(build::BuildArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Build(cmd) => cmd.run(),
        }
    }
}
