//! # Model Tool-Chain

use std::{
    fs,
    path::{Path, PathBuf},
};

use lmcorpus::{
    types::{CountType, StringChunkType},
    vocab::TopKVocab,
};

use crate::{
    ModelBuildOptions,
    ToolExecutor,
    ToolInvocation,
    ToolStage,
    ToolchainResult,
};

/// The files produced by a model build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifacts {
    /// The estimated model; `lm.arpa`.
    pub arpa: PathBuf,

    /// The vocabulary-filtered model; `lm_filtered.arpa`.
    pub filtered_arpa: PathBuf,

    /// The quantized binary model; `lm.binary`.
    pub binary: PathBuf,
}

impl ModelArtifacts {
    /// The artifact paths under an output directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            arpa: dir.join("lm.arpa"),
            filtered_arpa: dir.join("lm_filtered.arpa"),
            binary: dir.join("lm.binary"),
        }
    }
}

/// Runs the estimate, filter, and binarize stages in order.
///
/// The first failing stage aborts the build; failures are never retried.
pub struct ModelToolchain<E: ToolExecutor> {
    /// The config options.
    pub options: ModelBuildOptions,

    executor: E,
}

impl<E: ToolExecutor> ModelToolchain<E> {
    /// Create a new tool-chain.
    pub fn new(
        options: ModelBuildOptions,
        executor: E,
    ) -> Self {
        Self { options, executor }
    }

    /// Get the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Release the executor.
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// The artifact paths for this build.
    pub fn artifacts(&self) -> ModelArtifacts {
        ModelArtifacts::in_dir(&self.options.output_dir)
    }

    /// Construct the stage invocations, in run order.
    ///
    /// ## Arguments
    /// * `corpus` - the normalized corpus.
    /// * `vocab_text` - the vocabulary file content; piped to `filter`.
    pub fn plan<P: AsRef<Path>>(
        &self,
        corpus: P,
        vocab_text: &str,
    ) -> Vec<ToolInvocation> {
        let opts = &self.options;
        let artifacts = self.artifacts();
        let stage_invocation =
            |stage: ToolStage| ToolInvocation::new(stage, stage.program_in(&opts.kenlm_bins));

        let mut estimate = stage_invocation(ToolStage::Estimate)
            .arg("--order")
            .arg(opts.arpa_order.to_string())
            .arg("--temp_prefix")
            .arg(&opts.output_dir)
            .arg("--memory")
            .arg(&opts.max_arpa_memory)
            .arg("--text")
            .arg(corpus.as_ref())
            .arg("--arpa")
            .arg(&artifacts.arpa)
            .arg("--prune")
            .args(&opts.arpa_prune);
        if opts.discount_fallback {
            estimate = estimate.arg("--discount_fallback");
        }

        let mut model = std::ffi::OsString::from("model:");
        model.push(&artifacts.arpa);
        let filter = stage_invocation(ToolStage::Filter)
            .arg("single")
            .arg(model)
            .arg(&artifacts.filtered_arpa)
            .with_stdin(vocab_text.as_bytes().to_vec());

        let binarize = stage_invocation(ToolStage::Binarize)
            .arg("-a")
            .arg(opts.binary_a_bits.to_string())
            .arg("-q")
            .arg(opts.binary_q_bits.to_string())
            .arg("-v")
            .arg(&opts.binary_type)
            .arg(&artifacts.filtered_arpa)
            .arg(&artifacts.binary);

        vec![estimate, filter, binarize]
    }

    /// Build the model from a corpus and its top-k vocabulary.
    ///
    /// ## Errors
    /// The first stage error; later stages are not run.
    pub fn build<P, K, C>(
        &mut self,
        corpus: P,
        vocab: &TopKVocab<K, C>,
    ) -> ToolchainResult<ModelArtifacts>
    where
        P: AsRef<Path>,
        K: StringChunkType,
        C: CountType,
    {
        fs::create_dir_all(&self.options.output_dir)?;

        for invocation in self.plan(corpus, &vocab.to_vocab_string()) {
            log::info!(
                "Running {} stage: {} {}",
                invocation.stage,
                invocation.program.display(),
                invocation.arg_strings().join(" ")
            );
            self.executor.execute(&invocation)?;
        }

        let artifacts = self.artifacts();
        log::info!("Built model: {}", artifacts.binary.display());
        Ok(artifacts)
    }
}
