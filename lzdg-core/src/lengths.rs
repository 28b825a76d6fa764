//! Match length frequency table.

use crate::config::{MIN_LEN, NUM_LEN};
use crate::literals::power_bucket;
use crate::random::UniformSource;

/// Histogram of match lengths still to be emitted.
///
/// Bucket `i` counts how many matches of length `MIN_LEN + i` remain. A
/// freshly generated table sums to the requested batch size; counts are then
/// consumed one at a time until every bucket is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthTable {
    counts: [u32; NUM_LEN],
}

impl Default for LengthTable {
    fn default() -> Self {
        Self {
            counts: [0; NUM_LEN],
        }
    }
}

impl LengthTable {
    /// Resets the table and draws `num` lengths with the given exponent.
    ///
    /// Larger exponents put more weight on short lengths.
    pub fn regenerate<R>(&mut self, rng: &mut R, num: usize, exponent: f64)
    where
        R: UniformSource + ?Sized,
    {
        self.counts = [0; NUM_LEN];
        for _ in 0..num {
            let index = power_bucket(rng.draw_unit(), exponent, NUM_LEN);
            self.counts[index] += 1;
        }
    }

    /// Remaining count for bucket `index`.
    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Consumes one unit of bucket `index` and returns the matching length.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the bucket is already empty.
    pub fn take(&mut self, index: usize) -> usize {
        debug_assert!(self.counts[index] > 0, "bucket {index} is empty");
        self.counts[index] -= 1;
        MIN_LEN + index
    }

    /// Total number of lengths left in the table.
    pub fn remaining(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Returns `true` when every bucket has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Raw bucket counts, index `i` standing for length `MIN_LEN + i`.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}
