//! Error types for suffix automaton construction.

use thiserror::Error;

use crate::automaton::state::StateId;

/// Errors that can occur while building or checking a suffix automaton.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// The declared maximum length cannot back a state pool.
    ///
    /// This error occurs when `2 * max_length` overflows `usize` or the pool
    /// cannot be reserved.
    #[error("Invalid maximum length {max_length}: {reason}")]
    InvalidArgument {
        /// The declared maximum length.
        max_length: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// More characters were supplied than the declared maximum length.
    ///
    /// This is a capacity misdeclaration by the caller. The automaton is left
    /// unchanged.
    #[error(
        "Capacity exceeded: {length} of {max_length} characters used, cannot append {requested} more"
    )]
    CapacityExceeded {
        /// The declared maximum length.
        max_length: usize,
        /// Characters processed so far.
        length: usize,
        /// Characters the rejected call tried to append.
        requested: usize,
    },

    /// A structural invariant does not hold.
    ///
    /// Only reported by [`SuffixAutomaton::validate`](crate::automaton::SuffixAutomaton::validate).
    #[error("State {state} violates automaton invariant: {reason}")]
    InvariantViolation {
        /// The offending state.
        state: StateId,
        /// Which invariant failed.
        reason: String,
    },
}

/// A specialized `Result` type for suffix automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
