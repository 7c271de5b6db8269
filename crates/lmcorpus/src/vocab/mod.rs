//! # Top-K Vocabulary
//!
//! Selection of the `k` most frequent tokens of a
//! [`FrequencyTable`](crate::counting::FrequencyTable),
//! the statistics describing how well they cover the corpus,
//! and the vocabulary file format.

mod statistics;
mod top_k;
mod vocab_io;

#[doc(inline)]
pub use statistics::{CorpusStatistics, TierBoundary};
#[doc(inline)]
pub use top_k::{TopKVocab, VocabEntry, extract_top_k, select_top_k};
#[doc(inline)]
pub use vocab_io::{load_vocab_path, read_vocab, save_vocab_path, write_vocab};
