//! The permutation being sorted, plus its comparison/swap counters
//!
//! All mutation goes through [`ArrayModel::swap`] and [`ArrayModel::overwrite`],
//! which both count as a "swap" (every write to the permutation does). Reads
//! for rendering are free.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{SortvizError, SortvizResult};
use crate::types::MIN_ELEMENT_COUNT;

/// Comparison and write counters for the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Value comparisons performed
    pub comparisons: u64,
    /// Writes to the permutation (swaps and single-slot overwrites)
    pub swaps: u64,
}

/// Owns the permutation of `1..=N` and its counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayModel {
    values: Vec<u32>,
    counters: Counters,
}

impl ArrayModel {
    /// Sorted permutation `1..=len`
    pub fn sorted(len: usize) -> SortvizResult<Self> {
        if len < MIN_ELEMENT_COUNT {
            return Err(SortvizError::TooFewElements(len));
        }
        Ok(Self {
            values: (1..=len as u32).collect(),
            counters: Counters::default(),
        })
    }

    /// Randomly shuffled permutation `1..=len`
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> SortvizResult<Self> {
        let mut model = Self::sorted(len)?;
        model.values.shuffle(rng);
        Ok(model)
    }

    /// Build from explicit values, which must be a permutation of `1..=len`
    pub fn from_values(values: Vec<u32>) -> SortvizResult<Self> {
        let len = values.len();
        if len < MIN_ELEMENT_COUNT {
            return Err(SortvizError::TooFewElements(len));
        }
        let mut seen = vec![false; len];
        for &value in &values {
            let slot = (value as usize).wrapping_sub(1);
            if slot >= len || seen[slot] {
                return Err(SortvizError::NotAPermutation { len, value });
            }
            seen[slot] = true;
        }
        Ok(Self {
            values,
            counters: Counters::default(),
        })
    }

    /// Reshuffle in place and zero the counters
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
        self.counters = Counters::default();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value held (always N)
    pub fn max_value(&self) -> u32 {
        self.values.len() as u32
    }

    /// Whole sequence, for rendering (not counted)
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Uncounted read of a single slot
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.values[index]
    }

    /// `array[i] > array[j]`, counted
    pub fn greater(&mut self, i: usize, j: usize) -> bool {
        self.record_comparison();
        self.values[i] > self.values[j]
    }

    /// `array[i] < array[j]`, counted
    pub fn less(&mut self, i: usize, j: usize) -> bool {
        self.record_comparison();
        self.values[i] < self.values[j]
    }

    /// `array[i] > value`, counted
    pub fn greater_than(&mut self, i: usize, value: u32) -> bool {
        self.record_comparison();
        self.values[i] > value
    }

    /// `array[i] <= value`, counted
    pub fn at_most(&mut self, i: usize, value: u32) -> bool {
        self.record_comparison();
        self.values[i] <= value
    }

    /// Count a comparison made on values read outside the array
    /// (merge buffers, heap children)
    #[inline]
    pub fn record_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Exchange two positions, counted as one swap
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.counters.swaps += 1;
    }

    /// Plain write of `value` into `index`, counted as one swap
    ///
    /// Used by shifting algorithms; the caller is responsible for putting the
    /// displaced value back before the run ends.
    pub fn overwrite(&mut self, index: usize, value: u32) {
        debug_assert!(value >= 1 && value <= self.max_value());
        self.values[index] = value;
        self.counters.swaps += 1;
    }

    /// Put held-out values back into `start..`, uncounted
    ///
    /// Only used when a run is interrupted while values live outside the array.
    pub(crate) fn restore<I>(&mut self, start: usize, values: I)
    where
        I: IntoIterator<Item = u32>,
    {
        for (slot, value) in self.values[start..].iter_mut().zip(values) {
            *slot = value;
        }
    }

    /// Whether the contents are still a permutation of `1..=N`
    pub fn is_permutation(&self) -> bool {
        let len = self.values.len();
        let mut seen = vec![false; len];
        self.values.iter().all(|&value| {
            let slot = (value as usize).wrapping_sub(1);
            slot < len && !std::mem::replace(&mut seen[slot], true)
        })
    }

    /// Whether the contents are non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}
