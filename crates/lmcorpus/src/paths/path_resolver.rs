//! # Path Resolver

use std::{
    env,
    path::{Path, PathBuf},
};

/// Static configuration for directory resolution.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver {
    /// The resolution order for environment variables.
    pub env_vars: &'static [&'static str],

    /// The static fallback, if any.
    pub fallback: Option<&'static str>,
}

/// Resolves the dataset directory holding the preset corpora.
pub const DATA_DIR_RESOLVER: PathResolver = PathResolver {
    env_vars: &["LMCORPUS_DATA_DIR"],
    fallback: Some("/var/datasets/text"),
};

/// Resolves the directory holding `lmplz`, `filter` and `build_binary`.
///
/// There is no fallback; an unresolved value must be reported to the user.
pub const KENLM_BINS_RESOLVER: PathResolver = PathResolver {
    env_vars: &["LMCORPUS_KENLM_BINS", "KENLM_BINS"],
    fallback: None,
};

impl PathResolver {
    /// Resolve the directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.env_vars`; in order; empty values are ignored.
    /// 3. `self.fallback`, if present.
    /// 4. `None`
    pub fn resolve<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.env_vars {
            if let Ok(path) = env::var(env_var)
                && !path.is_empty()
            {
                return Some(PathBuf::from(path));
            }
        }

        self.fallback.map(PathBuf::from)
    }
}
