//! Common types for sortviz

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortvizError;

/// Default number of elements in the permutation
pub const DEFAULT_ELEMENT_COUNT: usize = 50;

/// Smallest permutation the engines and the tone mapper accept
pub const MIN_ELEMENT_COUNT: usize = 2;

/// Largest permutation a config may request
pub const MAX_ELEMENT_COUNT: usize = 512;

/// The six instrumented sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    Quick,
    Selection,
    Merge,
    Insertion,
    Heap,
}

impl Algorithm {
    /// All algorithms in button order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Insertion,
        Algorithm::Heap,
    ];

    /// Stable identifier used by `request_start` callers (CLI, config)
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quick",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Insertion => "insertion",
            Algorithm::Heap => "heap",
        }
    }

    /// Human-readable label
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortvizError;

    /// Accepts the id (`"heap"`), the label (`"Heap Sort"`) or `"heap_sort"`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let id = normalized.strip_suffix("_sort").unwrap_or(&normalized);
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == id)
            .ok_or_else(|| SortvizError::UnknownAlgorithm(s.to_string()))
    }
}
