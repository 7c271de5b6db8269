//! # Artifact Paths

use std::path::{Path, PathBuf};

/// The normalized corpus file for a context: `<dir>/<context>-lower.txt.gz`.
pub fn corpus_path<P: AsRef<Path>>(
    dir: P,
    context: &str,
) -> PathBuf {
    dir.as_ref().join(format!("{context}-lower.txt.gz"))
}

/// The vocabulary file for a context: `<dir>/<context>-vocab-<k>.txt`.
pub fn vocab_path<P: AsRef<Path>>(
    dir: P,
    context: &str,
    top_k: usize,
) -> PathBuf {
    dir.as_ref().join(format!("{context}-vocab-{top_k}.txt"))
}
