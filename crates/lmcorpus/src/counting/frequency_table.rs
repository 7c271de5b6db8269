//! # Frequency Table

use compact_str::CompactString;

use crate::types::{CommonHashMap, CountType, StringChunkType};

/// Mapping from token to occurrence count, which remembers discovery order.
///
/// Entries are stored in the order their tokens were first observed;
/// that order is the tie-break for equal counts in top-k selection.
///
/// # Parameters
/// * `K` - the type used to store token strings.
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K = CompactString, C = u64>
where
    K: StringChunkType,
    C: CountType,
{
    /// Token to position in `entries`.
    index: CommonHashMap<K, usize>,

    /// `(token, count)` in discovery order.
    entries: Vec<(K, C)>,
}

impl<K, C> Default for FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, C> PartialEq for FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl<K, C> FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create an empty table, pre-sized for `capacity` distinct tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: CommonHashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Increment the count of `token` by one.
    pub fn increment(
        &mut self,
        token: &str,
    ) {
        match self.index.get(token) {
            Some(&idx) => self.entries[idx].1 += C::one(),
            None => {
                let key: K = token.into();
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, C::one()));
            }
        }
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the count for a token.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<C> {
        self.index.get(token).map(|&idx| self.entries[idx].1)
    }

    /// The total number of token occurrences.
    pub fn total(&self) -> C {
        self.entries
            .iter()
            .fold(C::zero(), |acc, &(_, count)| acc + count)
    }

    /// Iterate `(token, count)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, C)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Get the entries, in discovery order.
    pub fn entries(&self) -> &[(K, C)] {
        &self.entries
    }
}
