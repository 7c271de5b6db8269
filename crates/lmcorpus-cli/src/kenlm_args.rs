use std::path::{Path, PathBuf};

use lmcorpus::paths::KENLM_BINS_RESOLVER;
use lmcorpus_kenlm::{
    DEFAULT_ARPA_ORDER,
    DEFAULT_ARPA_PRUNE,
    DEFAULT_BINARY_A_BITS,
    DEFAULT_BINARY_Q_BITS,
    DEFAULT_BINARY_TYPE,
    DEFAULT_MAX_ARPA_MEMORY,
    ModelBuildOptions,
};

/// `KenLM` model build argument group.
#[derive(clap::Args, Debug)]
pub struct KenlmArgs {
    /// Directory holding `lmplz`, `filter` and `build_binary`;
    /// else `$LMCORPUS_KENLM_BINS`; else `$KENLM_BINS`.
    #[arg(long, default_value = None)]
    pub kenlm_bins: Option<PathBuf>,

    /// Directory for the model files; defaults to the corpus output directory.
    #[arg(long, default_value = None)]
    pub model_dir: Option<PathBuf>,

    /// Order of k-grams in ARPA-file generation.
    #[arg(long, default_value_t = DEFAULT_ARPA_ORDER)]
    pub arpa_order: usize,

    /// Maximum allowed memory usage for ARPA-file generation.
    #[arg(long, default_value_t = DEFAULT_MAX_ARPA_MEMORY.to_string())]
    pub max_arpa_memory: String,

    /// ARPA pruning parameters; separate values with '|'.
    #[arg(long, default_value_t = DEFAULT_ARPA_PRUNE.to_string())]
    pub arpa_prune: String,

    /// Pass `--discount_fallback` to lmplz; for corpora where Kneser-Ney discounts cannot be estimated.
    #[arg(long)]
    pub discount_fallback: bool,

    /// Build binary quantization value a in bits.
    #[arg(long, default_value_t = DEFAULT_BINARY_A_BITS)]
    pub binary_a_bits: u32,

    /// Build binary quantization value q in bits.
    #[arg(long, default_value_t = DEFAULT_BINARY_Q_BITS)]
    pub binary_q_bits: u32,

    /// Build binary data structure type.
    #[arg(long, default_value_t = DEFAULT_BINARY_TYPE.to_string())]
    pub binary_type: String,
}

impl KenlmArgs {
    /// Resolve the `KenLM` binary directory.
    pub fn kenlm_bins(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(KENLM_BINS_RESOLVER
            .resolve(self.kenlm_bins.as_ref())
            .ok_or("KenLM binaries not found; pass --kenlm-bins or set $KENLM_BINS")?)
    }

    /// The model build options.
    ///
    /// ## Arguments
    /// * `kenlm_bins` - the resolved binary directory.
    /// * `default_dir` - the model directory when `--model-dir` is absent.
    pub fn build_options<P: AsRef<Path>>(
        &self,
        kenlm_bins: PathBuf,
        default_dir: P,
    ) -> ModelBuildOptions {
        let model_dir = self
            .model_dir
            .clone()
            .unwrap_or_else(|| default_dir.as_ref().to_path_buf());

        ModelBuildOptions::new(kenlm_bins, model_dir)
            .with_arpa_order(self.arpa_order)
            .with_max_arpa_memory(self.max_arpa_memory.clone())
            .with_arpa_prune(&self.arpa_prune)
            .with_discount_fallback(self.discount_fallback)
            .with_binary_bits(self.binary_a_bits, self.binary_q_bits)
            .with_binary_type(self.binary_type.clone())
    }
}
