//! # Directory Resolution
//!
//! Static defaults for locating the dataset directory and the `KenLM`
//! binaries.

mod path_resolver;

#[doc(inline)]
pub use path_resolver::{DATA_DIR_RESOLVER, KENLM_BINS_RESOLVER, PathResolver};
