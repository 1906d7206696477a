use std::fmt;
use thiserror::Error;

/// Trait for specifying exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

/// Identifies one of the two sequences passed to an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sequence {
    /// The first sequence, consumed by `D` states
    A,
    /// The second sequence, consumed by `I` states
    B,
}

impl fmt::Display for Sequence {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sequence::A => f.write_str("A"),
            Sequence::B => f.write_str("B"),
        }
    }
}

/// An enum representing configuration or input errors detected before any
/// dynamic programming matrix is allocated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AlignmentError {
    /// A gap penalty was positive. Penalties are added as given, so they must
    /// be zero or negative.
    #[error("The {parameter} gap penalty must be zero or negative, but {value} was provided")]
    PositiveGapPenalty { parameter: &'static str, value: i64 },
    /// The scoring model does not define a score for an element.
    #[error("The scoring model has no score for the element at index {index} of sequence {sequence}")]
    UnscorableElement { sequence: Sequence, index: usize },
    /// The matrices would exceed the configured number of cells.
    #[error("The alignment requires {cells} matrix cells, exceeding the configured limit of {limit}")]
    TooManyCells { cells: usize, limit: usize },
}

impl GetCode for AlignmentError {
    #[inline]
    fn get_code(&self) -> i32 {
        match self {
            AlignmentError::PositiveGapPenalty { .. } | AlignmentError::UnscorableElement { .. } => 2,
            AlignmentError::TooManyCells { .. } => 3,
        }
    }
}

/// An enum representing errors that can happen when calculating an alignment
/// score for a particular path of alignment states.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScoringError {
    /// Sequence A ended before all states were consumed
    #[error("Sequence A ended before all alignment states were consumed!")]
    AEnded,
    /// Sequence B ended before all states were consumed
    #[error("Sequence B ended before all alignment states were consumed!")]
    BEnded,
    /// The states did not consume all of sequence A
    #[error("Failed to consume the full portion of sequence A!")]
    FullANotUsed,
    /// The states did not consume all of sequence B
    #[error("Failed to consume the full portion of sequence B!")]
    FullBNotUsed,
    /// An operation other than `M`, `=`, `X`, `D`, or `I` was encountered
    #[error("An unsupported alignment operation was encountered: {}", *.0 as char)]
    InvalidOp(u8),
}

impl GetCode for ScoringError {}

/// An enum representing errors when parsing alignment states from a
/// CIGAR-like string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StatesParseError {
    /// An operation was not preceded by an increment
    #[error("The operation '{}' was not preceded by an increment", *.0 as char)]
    MissingIncrement(u8),
    /// An increment of zero was given
    #[error("Increments must be non-zero")]
    ZeroIncrement,
    /// An increment was too large to represent
    #[error("An increment overflowed")]
    IncrementOverflow,
    /// An operation other than `M`, `=`, `X`, `D`, or `I` was encountered
    #[error("An unsupported alignment operation was encountered: {}", *.0 as char)]
    InvalidOp(u8),
    /// The string ended with digits not followed by an operation
    #[error("The alignment states ended with a dangling increment")]
    DanglingIncrement,
}

impl GetCode for StatesParseError {}
