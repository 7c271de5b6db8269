mod commands;
mod corpus_args;
mod kenlm_args;
mod logging;
mod presets;

use clap::Parser;
use commands::Commands;

/// lmcorpus
#[derive(clap::Parser, Debug)]
#[command(version, about = "Prepare n-gram language model corpora and vocabularies")]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
