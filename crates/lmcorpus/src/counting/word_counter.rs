//! # Word Counter

use compact_str::CompactString;

use crate::{
    counting::FrequencyTable,
    types::{CountType, StringChunkType},
};

/// The default distinct-token capacity hint.
pub const DEFAULT_VOCAB_CAPACITY: usize = 100_000;

/// Options for [`WordCounter`].
#[derive(Debug, Clone)]
pub struct WordCounterOptions {
    /// Expected number of distinct tokens.
    /// Used when pre-allocating the frequency table.
    pub capacity_hint: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            capacity_hint: DEFAULT_VOCAB_CAPACITY,
        }
    }
}

impl WordCounterOptions {
    /// Set the expected number of distinct tokens.
    pub fn with_capacity_hint(
        self,
        capacity_hint: usize,
    ) -> Self {
        Self { capacity_hint }
    }

    /// Initializes a [`WordCounter`] from these options.
    pub fn init<K, C>(self) -> WordCounter<K, C>
    where
        K: StringChunkType,
        C: CountType,
    {
        WordCounter::new(self)
    }
}

/// Word frequency accumulator.
///
/// The table is unbounded; memory grows with the number of distinct tokens,
/// not with corpus size.
///
/// # Parameters
/// * `K` - the type used to store strings in the word counts.
/// * `C` - the type used to store counts in the word counts.
pub struct WordCounter<K = CompactString, C = u64>
where
    K: StringChunkType,
    C: CountType,
{
    /// The config options.
    pub options: WordCounterOptions,

    /// The word counts.
    table: FrequencyTable<K, C>,
}

impl<K, C> Default for WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self::new(WordCounterOptions::default())
    }
}

impl<K, C> WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> Self {
        let table = FrequencyTable::with_capacity(options.capacity_hint);
        Self { options, table }
    }

    /// Increment the count of each token by one per occurrence.
    ///
    /// Empty tokens are ignored.
    ///
    /// Batching is irrelevant to the result: observing a token stream in
    /// any partition, in the same overall order, produces the same table.
    pub fn observe<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            if !token.is_empty() {
                self.table.increment(token);
            }
        }
    }

    /// Get the current word counts.
    pub fn table(&self) -> &FrequencyTable<K, C> {
        &self.table
    }

    /// Release the word counts and return them.
    pub fn release(self) -> FrequencyTable<K, C> {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let mut wc: WordCounter<String, u64> = WordCounterOptions::default()
            .with_capacity_hint(16)
            .init();
        assert_eq!(wc.options.capacity_hint, 16);

        wc.observe(["hello", "world"]);
        wc.observe(vec!["foo".to_string(), "world".to_string()]);
        wc.observe(Vec::<&str>::new());

        let table = wc.release();
        assert_eq!(table.get("world"), Some(2));
        assert_eq!(table.get("hello"), Some(1));
        assert_eq!(table.get("foo"), Some(1));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_observe_is_batching_invariant() {
        let stream = ["the", "cat", "sat", "the", "dog", "sat", "the", "cat", "ran"];

        let mut whole: WordCounter = Default::default();
        whole.observe(stream);

        for split in 0..=stream.len() {
            let (head, tail) = stream.split_at(split);

            let mut parts: WordCounter = Default::default();
            parts.observe(head);
            parts.observe(tail);

            assert_eq!(parts.table(), whole.table(), "split at {split}");
        }

        let mut singles: WordCounter = Default::default();
        for token in stream {
            singles.observe([token]);
        }
        assert_eq!(singles.release(), whole.release());
    }

    #[test]
    fn test_empty_tokens_are_ignored() {
        let mut wc: WordCounter = Default::default();
        wc.observe(["", "a", ""]);
        assert_eq!(wc.table().len(), 1);
        assert_eq!(wc.table().get(""), None);
        assert_eq!(wc.table().total(), 1);
    }

    #[test]
    fn test_duplicates_within_one_call() {
        let mut wc: WordCounter = Default::default();
        wc.observe(["a", "a", "a"]);
        assert_eq!(wc.table().get("a"), Some(3));
    }
}
