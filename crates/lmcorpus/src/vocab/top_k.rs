//! # Top-K Vocabulary Selection

use core::cmp::Reverse;

use compact_str::CompactString;
use dary_heap::OctonaryHeap;

use crate::{
    LMResult,
    counting::FrequencyTable,
    types::{CountType, StringChunkType},
    vocab::CorpusStatistics,
};

/// A `(token, count)` vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry<K = CompactString, C = u64> {
    /// The token.
    pub token: K,

    /// The number of occurrences of the token.
    pub count: C,
}

impl<K, C> VocabEntry<K, C> {
    /// Create a new entry.
    pub fn new(
        token: K,
        count: C,
    ) -> Self {
        Self { token, count }
    }
}

/// The `k` most frequent tokens of a [`FrequencyTable`].
///
/// Entries are ordered by count descending;
/// equal counts are ordered by discovery (first-seen first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopKVocab<K = CompactString, C = u64> {
    k: usize,
    entries: Vec<VocabEntry<K, C>>,
}

impl<K, C> TopKVocab<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// The requested size; the vocab may hold fewer entries.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the vocab empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entries, most frequent first.
    pub fn entries(&self) -> &[VocabEntry<K, C>] {
        &self.entries
    }

    /// Iterate the tokens, most frequent first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.token.as_ref())
    }

    /// The sum of the entry counts.
    pub fn count_sum(&self) -> C {
        self.entries
            .iter()
            .fold(C::zero(), |acc, e| acc + e.count)
    }

    /// The newline-joined token list; no trailing newline.
    ///
    /// This is the exact vocabulary file content.
    pub fn to_vocab_string(&self) -> String {
        self.tokens().collect::<Vec<_>>().join("\n")
    }
}

/// Select the `k` most frequent tokens of a table.
///
/// Runs in `O(n log k)` with a bounded min-heap.
/// Equal counts resolve to the earlier-discovered token.
pub fn select_top_k<K, C>(
    table: &FrequencyTable<K, C>,
    k: usize,
) -> TopKVocab<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    // Heap keys order "better" entries higher: by count, then by earlier discovery.
    // Wrapped in `Reverse` to keep the worst retained entry at the top.
    let mut heap: OctonaryHeap<Reverse<(C, Reverse<usize>)>> =
        OctonaryHeap::with_capacity(k.min(table.len()));

    for (idx, &(_, count)) in table.entries().iter().enumerate() {
        let key = (count, Reverse(idx));
        if heap.len() < k {
            heap.push(Reverse(key));
        } else if let Some(Reverse(worst)) = heap.peek()
            && key > *worst
        {
            heap.pop();
            heap.push(Reverse(key));
        }
    }

    let mut selected: Vec<(C, Reverse<usize>)> =
        heap.into_vec().into_iter().map(|Reverse(key)| key).collect();
    selected.sort_unstable_by(|a, b| b.cmp(a));

    let entries = table.entries();
    TopKVocab {
        k,
        entries: selected
            .into_iter()
            .map(|(count, Reverse(idx))| VocabEntry::new(entries[idx].0.clone(), count))
            .collect(),
    }
}

/// Select the top-k vocabulary, and compute the corpus statistics.
///
/// ## Errors
/// [`crate::LmCorpusError::EmptyCorpus`] if the table holds no occurrences.
pub fn extract_top_k<K, C>(
    table: &FrequencyTable<K, C>,
    k: usize,
) -> LMResult<(TopKVocab<K, C>, CorpusStatistics<K, C>)>
where
    K: StringChunkType,
    C: CountType,
{
    let vocab = select_top_k(table, k);
    let stats = CorpusStatistics::compute(table, &vocab)?;
    Ok((vocab, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LmCorpusError, counting::WordCounter};

    fn table_of(batches: &[&[&str]]) -> FrequencyTable {
        let mut wc: WordCounter = Default::default();
        for batch in batches {
            wc.observe(batch.iter());
        }
        wc.release()
    }

    fn pairs(vocab: &TopKVocab) -> Vec<(&str, u64)> {
        vocab
            .entries()
            .iter()
            .map(|e| (e.token.as_str(), e.count))
            .collect()
    }

    #[test]
    fn test_tie_break_is_discovery_order() {
        let table = table_of(&[&["b", "a", "a", "b"], &["c"]]);

        let vocab = select_top_k(&table, 2);
        assert_eq!(pairs(&vocab), vec![("b", 2), ("a", 2)]);
        assert_eq!(vocab.k(), 2);
    }

    #[test]
    fn test_tie_break_not_lexicographic() {
        let table = table_of(&[&["zeta", "alpha", "mid", "alpha", "zeta", "mid"]]);

        let vocab = select_top_k(&table, 3);
        assert_eq!(pairs(&vocab), vec![("zeta", 2), ("alpha", 2), ("mid", 2)]);

        let vocab = select_top_k(&table, 1);
        assert_eq!(pairs(&vocab), vec![("zeta", 2)]);
    }

    #[test]
    fn test_k_larger_than_table() {
        let table = table_of(&[&["x", "y", "y", "z"]]);

        let (vocab, stats) = extract_top_k(&table, 10).unwrap();
        assert_eq!(pairs(&vocab), vec![("y", 2), ("x", 1), ("z", 1)]);
        assert_eq!(vocab.len(), table.len());
        assert_eq!(vocab.k(), 10);
        assert_eq!(stats.coverage_percent, 100.0);
    }

    #[test]
    fn test_k_zero() {
        let table = table_of(&[&["x", "y"]]);

        let (vocab, stats) = extract_top_k(&table, 0).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.to_vocab_string(), "");
        assert_eq!(stats.coverage_percent, 0.0);
        assert_eq!(stats.most_common, None);
        assert_eq!(stats.least_common, None);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let table: FrequencyTable = Default::default();

        assert!(select_top_k(&table, 5).is_empty());
        assert!(matches!(
            extract_top_k(&table, 5),
            Err(LmCorpusError::EmptyCorpus)
        ));
        assert!(matches!(
            extract_top_k(&table, 0),
            Err(LmCorpusError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_selection_matches_stable_sort() {
        // A larger table, checked against a full stable sort.
        let tokens: Vec<String> = (0..500).map(|i| format!("w{}", (i * 7919) % 97)).collect();
        let mut wc: WordCounter = Default::default();
        wc.observe(tokens.iter());
        let table = wc.release();

        let mut expected: Vec<(&str, u64)> =
            table.iter().map(|(k, c)| (k.as_str(), c)).collect();
        expected.sort_by(|a, b| b.1.cmp(&a.1));

        for k in [1, 5, 20, 97, 200] {
            let vocab = select_top_k(&table, k);
            let want: Vec<(&str, u64)> = expected.iter().take(k).copied().collect();
            assert_eq!(pairs(&vocab), want, "k = {k}");
        }
    }

    #[test]
    fn test_vocab_string() {
        let table = table_of(&[&["the", "cat", "the"]]);
        let vocab = select_top_k(&table, 2);

        assert_eq!(vocab.to_vocab_string(), "the\ncat");
        assert_eq!(vocab.tokens().collect::<Vec<_>>(), vec!["the", "cat"]);
        assert_eq!(vocab.count_sum(), 3);
    }
}
