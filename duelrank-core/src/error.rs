/// Error types for the sequencer.
///
/// Misuse of a session is recoverable by design: a rejected choice signal
/// must leave the score table untouched, so these seams return `Result`
/// instead of panicking.
use thiserror::Error;

/// Errors from session construction and score handoff.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The input list contains the same ID twice. Duplicates are rejected,
    /// not deduplicated — the caller's list is its own source of truth.
    #[error("duplicate item ID: {0}")]
    DuplicateItem(i64),

    /// `take_scores()` was called while pairs are still outstanding.
    #[error("session is not complete: {remaining} pair(s) remaining")]
    NotComplete { remaining: usize },

    /// The final score table was already handed off.
    #[error("final scores were already taken")]
    AlreadyTaken,

    /// The session was aborted; its queue and scores were discarded.
    #[error("session was aborted")]
    Aborted,
}

/// Errors from a choice signal. Callers are expected to ignore these —
/// a rejected signal simply never counts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    /// No pair is being presented: the previous choice was already recorded
    /// and `advance()` has not run yet, or the session is complete.
    #[error("no pair is currently presented")]
    NotPresenting,

    /// The chosen ID is not one of the two presented items.
    #[error("item {0} is not part of the presented pair")]
    NotInPair(i64),
}
