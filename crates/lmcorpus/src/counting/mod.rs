//! # Word Frequency Counting

mod frequency_table;
mod word_counter;

#[doc(inline)]
pub use frequency_table::FrequencyTable;
#[doc(inline)]
pub use word_counter::{DEFAULT_VOCAB_CAPACITY, WordCounter, WordCounterOptions};
