//! # Corpus Statistics

use core::fmt;

use compact_str::CompactString;
use num_traits::ToPrimitive;

use crate::{
    LMResult,
    LmCorpusError,
    counting::FrequencyTable,
    types::{CountType, StringChunkType},
    vocab::{TopKVocab, VocabEntry},
};

/// Where the last frequency tier of a top-k vocabulary begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierBoundary<K = CompactString, C = u64> {
    /// The 0-based rank of `entry` within the top-k.
    pub rank: usize,

    /// The entry.
    pub entry: VocabEntry<K, C>,
}

/// Descriptive statistics of a corpus and its top-k vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStatistics<K = CompactString, C = u64> {
    /// The requested vocabulary size.
    pub top_k: usize,

    /// Total token occurrences.
    pub total_words: C,

    /// Distinct tokens.
    pub unique_words: usize,

    /// Sum of the top-k counts.
    pub top_k_sum: C,

    /// `top_k_sum / total_words * 100`.
    pub coverage_percent: f64,

    /// The most frequent entry.
    pub most_common: Option<VocabEntry<K, C>>,

    /// The least frequent entry within the top-k.
    pub least_common: Option<VocabEntry<K, C>>,

    /// Scanning the top-k from its least frequent end, the first entry
    /// whose count exceeds the least frequent count.
    ///
    /// `None` when every top-k entry shares the least frequent count.
    pub tier_boundary: Option<TierBoundary<K, C>>,
}

impl<K, C> CorpusStatistics<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Compute statistics for a table and its selected vocabulary.
    ///
    /// ## Errors
    /// [`LmCorpusError::EmptyCorpus`] if the table holds no occurrences;
    /// checked before any division.
    pub fn compute(
        table: &FrequencyTable<K, C>,
        vocab: &TopKVocab<K, C>,
    ) -> LMResult<Self> {
        let total_words = table.total();
        if total_words.is_zero() {
            return Err(LmCorpusError::EmptyCorpus);
        }

        let top_k_sum = vocab.count_sum();
        let coverage_percent = if top_k_sum == total_words {
            100.0
        } else {
            let top = ToPrimitive::to_f64(&top_k_sum).unwrap_or_default();
            let total = ToPrimitive::to_f64(&total_words).unwrap_or_default();
            top / total * 100.0
        };

        let entries = vocab.entries();
        let most_common = entries.first().cloned();
        let least_common = entries.last().cloned();

        let tier_boundary = least_common.as_ref().and_then(|last| {
            entries
                .iter()
                .enumerate()
                .rev()
                .find(|(_, e)| e.count > last.count)
                .map(|(rank, e)| TierBoundary {
                    rank,
                    entry: e.clone(),
                })
        });

        Ok(Self {
            top_k: vocab.k(),
            total_words,
            unique_words: table.len(),
            top_k_sum,
            coverage_percent,
            most_common,
            least_common,
            tier_boundary,
        })
    }
}

impl<K, C> fmt::Display for CorpusStatistics<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "  total words:        {}", self.total_words)?;
        writeln!(f, "  unique words:       {}", self.unique_words)?;
        write!(
            f,
            "  top-{} coverage:    {:.4}%",
            self.top_k, self.coverage_percent
        )?;
        if let Some(e) = &self.most_common {
            write!(
                f,
                "\n  most common:        \"{}\" ({} occurrences)",
                e.token.as_ref(),
                e.count
            )?;
        }
        if let Some(e) = &self.least_common {
            write!(
                f,
                "\n  least common top-k: \"{}\" ({} occurrences)",
                e.token.as_ref(),
                e.count
            )?;
        }
        if let Some(b) = &self.tier_boundary {
            write!(
                f,
                "\n  tier boundary:      \"{}\" with {} occurrences at rank {}",
                b.entry.token.as_ref(),
                b.entry.count,
                b.rank
            )?;
        }
        Ok(())
    }
}
