use crate::error::{Error, Result};

/// Occurrence count of every byte value present in an input.
///
/// Backed by a dense 256-slot array, so iteration is always in ascending
/// byte order. That order is what the Huffman container stores and what the
/// tree builder uses to create leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    distinct: usize,
}

impl FrequencyTable {
    /// Counts every byte of `data` in a single pass.
    pub fn analyze(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        let distinct = counts.iter().filter(|&&count| count > 0).count();

        Self { counts, distinct }
    }

    /// Rebuilds a table from stored `(byte, count)` pairs.
    ///
    /// Rejects zero counts and repeated bytes, which no encoder produces.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut counts = [0u64; 256];
        let mut distinct = 0;

        for (byte, count) in entries {
            if count == 0 {
                return Err(Error::format(format!(
                    "byte {byte:#04x} stored with a zero frequency"
                )));
            }
            let slot = &mut counts[byte as usize];
            if *slot != 0 {
                return Err(Error::format(format!(
                    "byte {byte:#04x} appears twice in the frequency table"
                )));
            }
            *slot = count;
            distinct += 1;
        }

        Ok(Self { counts, distinct })
    }

    /// Count for `byte`, zero when it never occurs.
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of distinct byte values present.
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    /// Returns true if no byte was counted.
    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Sum of all counts, i.e. the length of the analyzed input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Present bytes and their counts, in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
    }
}
