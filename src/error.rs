//! Error types for the stable matching engine.
//!
//! Every variant is a structural fault in the input or a broken invariant.
//! None of them are transient, so nothing here is retried.

use thiserror::Error;

use crate::types::Side;

/// Why a supplied ranking is not a permutation of the opposite side's ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceFault {
    /// The source produced no ranking for this id
    #[error("no ranking supplied")]
    Missing,

    /// Ranking does not list every counterpart exactly once
    #[error("expected {expected} entries, found {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Ranking names an id outside `0..n`
    #[error("entry {entry} is out of range")]
    OutOfRange { entry: usize },

    /// Ranking names the same counterpart twice
    #[error("entry {entry} appears more than once")]
    Duplicate { entry: usize },

    /// The source holds more rankings than there are participants
    #[error("expected {expected} rankings, found {actual}")]
    WrongCount { expected: usize, actual: usize },

    /// The two sides were given a different number of rankings
    #[error("{proposers} proposer rankings but {responders} responder rankings")]
    SizeMismatch { proposers: usize, responders: usize },
}

/// Errors raised while building or running the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid {side} preferences for id {id}: {fault}")]
    InvalidPreference {
        side: Side,
        id: usize,
        fault: PreferenceFault,
    },

    /// A proposer ran out of responders while still unmatched
    #[error("proposer {proposer} exhausted its preferences while unmatched")]
    ExhaustedPreferences { proposer: usize },

    /// The driver was stepped past an empty proposal queue
    #[error("proposal queue is empty")]
    EmptyQueue,

    #[error("{unmatched} proposer(s) left unmatched at termination")]
    Incomplete { unmatched: usize },

    #[error("failed to encode matching: {0}")]
    Encoding(String),
}
