//! # `lmcorpus-kenlm` `KenLM` Tool-Chain Driver
//!
//! Builds an n-gram language model from the artifacts of an
//! [`lmcorpus`] pipeline run by invoking the external `KenLM` binaries:
//!
//! 1. `lmplz` estimates `lm.arpa` from the normalized corpus;
//! 2. `filter single` restricts it to the top-k vocabulary (piped on stdin),
//!    producing `lm_filtered.arpa`;
//! 3. `build_binary` quantizes it into `lm.binary`.
//!
//! Each stage is a typed [`ToolInvocation`], run by a [`ToolExecutor`];
//! [`ProcessExecutor`] spawns real processes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lmcorpus_kenlm::{ModelBuildOptions, ProcessExecutor};
//! # fn demo(report: lmcorpus::pipeline::PipelineReport) -> lmcorpus_kenlm::ToolchainResult<()> {
//! let artifacts = ModelBuildOptions::new("/opt/kenlm/bin", "/tmp/lm")
//!     .with_arpa_order(4)
//!     .init(ProcessExecutor)
//!     .build(&report.corpus_path, &report.vocab)?;
//!
//! println!("{}", artifacts.binary.display());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs, unused)]

mod errors;
mod executor;
mod invocation;
mod options;
mod toolchain;

#[doc(inline)]
pub use errors::{ToolchainError, ToolchainResult};
#[doc(inline)]
pub use executor::{ProcessExecutor, ToolExecutor};
#[doc(inline)]
pub use invocation::{ToolInvocation, ToolStage};
#[doc(inline)]
pub use options::{
    DEFAULT_ARPA_ORDER,
    DEFAULT_ARPA_PRUNE,
    DEFAULT_BINARY_A_BITS,
    DEFAULT_BINARY_Q_BITS,
    DEFAULT_BINARY_TYPE,
    DEFAULT_MAX_ARPA_MEMORY,
    ModelBuildOptions,
    parse_prune,
};
#[doc(inline)]
pub use toolchain::{ModelArtifacts, ModelToolchain};
