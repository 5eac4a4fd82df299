//! Error types for Syzygy.

use thiserror::Error;

/// Result type alias using Syzygy's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Which input sequence an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The anchor sequence.
    Anchor,
    /// The candidate sequence.
    Candidate,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Anchor => write!(f, "anchor"),
            Side::Candidate => write!(f, "candidate"),
        }
    }
}

/// Main error type for Syzygy operations.
///
/// Every failure is either an input-validation error or a buffer-capacity
/// error; all are fatal to the current call. There are no transient errors
/// and no retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input interval has `start > end`. Detected before any emission.
    #[error("invalid {side} interval at index {index}: start exceeds end")]
    InvalidInterval {
        /// Which input sequence held the malformed interval.
        side: Side,
        /// Index of the malformed interval within that sequence.
        index: usize,
    },

    /// A tolerance was constructed with a negative component.
    #[error("tolerance components must be non-negative")]
    InvalidTolerance,

    /// The policy declared an ordering the input does not satisfy.
    /// Detected before any emission.
    #[error("{side} sequence is not sorted: order violated at index {index}")]
    UnsortedInput {
        /// Which input sequence violated the declared ordering.
        side: Side,
        /// Index of the first out-of-order element.
        index: usize,
    },

    /// A caller-supplied output buffer ran out of capacity. The filled
    /// prefix remains readable; re-running with a larger buffer yields the
    /// full result (the computation is deterministic).
    #[error("output buffer exhausted: capacity {capacity} reached")]
    BufferExhausted {
        /// The capacity of the exhausted buffer.
        capacity: usize,
    },

    /// A match pair was constructed with an inconsistent type/relation
    /// combination: the relation is carried if and only if the match is an
    /// interval match.
    #[error("match pair relation is only carried for interval matches")]
    InvalidMatchPair,

    /// A sink reported a failure. Emission stops immediately and the error
    /// propagates to the caller.
    #[error("sink failure: {0}")]
    SinkFault(String),
}
