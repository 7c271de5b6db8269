//! # Model Build Options

use std::path::PathBuf;

use crate::{ModelToolchain, ToolExecutor};

/// The default n-gram order.
pub const DEFAULT_ARPA_ORDER: usize = 5;

/// The default `lmplz` memory budget.
pub const DEFAULT_MAX_ARPA_MEMORY: &str = "85%";

/// The default `lmplz` pruning thresholds, `|` separated.
pub const DEFAULT_ARPA_PRUNE: &str = "0|0|1";

/// The default `build_binary -a` pointer compression bits.
pub const DEFAULT_BINARY_A_BITS: u32 = 255;

/// The default `build_binary -q` quantization bits.
pub const DEFAULT_BINARY_Q_BITS: u32 = 8;

/// The default `build_binary` data structure.
pub const DEFAULT_BINARY_TYPE: &str = "trie";

/// Split a `|` separated pruning argument into thresholds.
///
/// Surrounding whitespace is trimmed, and empty pieces are dropped.
pub fn parse_prune(spec: &str) -> Vec<String> {
    spec.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Options for [`ModelToolchain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBuildOptions {
    /// Directory holding `lmplz`, `filter` and `build_binary`.
    pub kenlm_bins: PathBuf,

    /// Directory for `lm.arpa`, `lm_filtered.arpa`, `lm.binary`;
    /// also the `lmplz` temp prefix.
    pub output_dir: PathBuf,

    /// The n-gram order.
    pub arpa_order: usize,

    /// The `lmplz` memory budget; e.g. `"85%"` or `"4G"`.
    pub max_arpa_memory: String,

    /// The `lmplz` pruning thresholds, one per order.
    pub arpa_prune: Vec<String>,

    /// Pass `--discount_fallback` to `lmplz`.
    pub discount_fallback: bool,

    /// `build_binary -a`.
    pub binary_a_bits: u32,

    /// `build_binary -q`.
    pub binary_q_bits: u32,

    /// `build_binary` data structure; e.g. `"trie"` or `"probing"`.
    pub binary_type: String,
}

impl ModelBuildOptions {
    /// Create new options, with default estimation parameters.
    ///
    /// ## Arguments
    /// * `kenlm_bins` - the `KenLM` binary directory.
    /// * `output_dir` - the model output directory.
    pub fn new<B: Into<PathBuf>, O: Into<PathBuf>>(
        kenlm_bins: B,
        output_dir: O,
    ) -> Self {
        Self {
            kenlm_bins: kenlm_bins.into(),
            output_dir: output_dir.into(),
            arpa_order: DEFAULT_ARPA_ORDER,
            max_arpa_memory: DEFAULT_MAX_ARPA_MEMORY.to_string(),
            arpa_prune: parse_prune(DEFAULT_ARPA_PRUNE),
            discount_fallback: false,
            binary_a_bits: DEFAULT_BINARY_A_BITS,
            binary_q_bits: DEFAULT_BINARY_Q_BITS,
            binary_type: DEFAULT_BINARY_TYPE.to_string(),
        }
    }

    /// Sets the n-gram order.
    pub fn with_arpa_order(
        self,
        arpa_order: usize,
    ) -> Self {
        Self { arpa_order, ..self }
    }

    /// Sets the `lmplz` memory budget.
    pub fn with_max_arpa_memory<S: Into<String>>(
        self,
        max_arpa_memory: S,
    ) -> Self {
        Self {
            max_arpa_memory: max_arpa_memory.into(),
            ..self
        }
    }

    /// Sets the pruning thresholds from a `|` separated specification.
    pub fn with_arpa_prune(
        self,
        spec: &str,
    ) -> Self {
        Self {
            arpa_prune: parse_prune(spec),
            ..self
        }
    }

    /// Enables or disables `--discount_fallback`.
    pub fn with_discount_fallback(
        self,
        discount_fallback: bool,
    ) -> Self {
        Self {
            discount_fallback,
            ..self
        }
    }

    /// Sets the `build_binary` quantization parameters.
    pub fn with_binary_bits(
        self,
        a_bits: u32,
        q_bits: u32,
    ) -> Self {
        Self {
            binary_a_bits: a_bits,
            binary_q_bits: q_bits,
            ..self
        }
    }

    /// Sets the `build_binary` data structure.
    pub fn with_binary_type<S: Into<String>>(
        self,
        binary_type: S,
    ) -> Self {
        Self {
            binary_type: binary_type.into(),
            ..self
        }
    }

    /// Initializes a [`ModelToolchain`] from these options.
    pub fn init<E: ToolExecutor>(
        self,
        executor: E,
    ) -> ModelToolchain<E> {
        ModelToolchain::new(self, executor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prune() {
        assert_eq!(parse_prune("0|0|1"), vec!["0", "0", "1"]);
        assert_eq!(parse_prune(" 0 | 1 |"), vec!["0", "1"]);
        assert_eq!(parse_prune("2"), vec!["2"]);
        assert!(parse_prune("").is_empty());
    }

    #[test]
    fn test_options() {
        let options = ModelBuildOptions::new("/opt/kenlm/bin", "/tmp/lm");
        assert_eq!(options.arpa_order, DEFAULT_ARPA_ORDER);
        assert_eq!(options.arpa_prune, vec!["0", "0", "1"]);
        assert!(!options.discount_fallback);

        let options = options
            .with_arpa_order(3)
            .with_max_arpa_memory("4G")
            .with_arpa_prune("0|1")
            .with_discount_fallback(true)
            .with_binary_bits(64, 16)
            .with_binary_type("probing");

        assert_eq!(options.arpa_order, 3);
        assert_eq!(options.max_arpa_memory, "4G");
        assert_eq!(options.arpa_prune, vec!["0", "1"]);
        assert!(options.discount_fallback);
        assert_eq!((options.binary_a_bits, options.binary_q_bits), (64, 16));
        assert_eq!(options.binary_type, "probing");
    }
}
