//! # Error Types

use std::path::PathBuf;

use crate::ToolStage;

/// Errors from `KenLM` tool-chain operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// A stage binary could not be started.
    #[error("failed to launch {stage} stage ({}): {source}", program.display())]
    Launch {
        /// The stage.
        stage: ToolStage,

        /// The binary.
        program: PathBuf,

        /// The underlying error.
        source: std::io::Error,
    },

    /// A stage exited unsuccessfully; later stages were not run.
    #[error("{stage} stage failed: {status}")]
    StageFailed {
        /// The stage.
        stage: ToolStage,

        /// The exit status, as reported by the executor.
        status: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for `KenLM` tool-chain operations.
pub type ToolchainResult<T> = core::result::Result<T, ToolchainError>;
