//! Error types for the sortable core

use thiserror::Error;

/// Errors raised while building or driving a run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortvizError {
    /// `request_start` named an algorithm that doesn't exist
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The permutation must hold at least two values
    #[error("Permutation needs at least 2 elements, got {0}")]
    TooFewElements(usize),

    /// Values supplied for the array are not a permutation of 1..=N
    #[error("Values are not a permutation of 1..={len}: offending value {value}")]
    NotAPermutation { len: usize, value: u32 },
}

/// Result type for core operations
pub type SortvizResult<T> = Result<T, SortvizError>;
