//! # libsam
//!
//! Online suffix automaton construction and queries.
//!
//! A suffix automaton is the minimal deterministic automaton accepting
//! exactly the substrings of a text. It is built one character at a time in
//! amortized linear total time and answers substring membership,
//! distinct-substring counting and occurrence queries, based on:
//!
//! > Blumer, A., Blumer, J., Haussler, D., Ehrenfeucht, A., Chen, M. T., and
//! > Seiferas, J. "The smallest automaton recognizing the subwords of a text."
//! > Theoretical Computer Science 40 (1985): 31-55.
//!
//! ## Example
//!
//! ```rust
//! use libsam::prelude::*;
//!
//! let mut sam = SuffixAutomaton::new(5)?;
//! for symbol in "abcbc".chars() {
//!     sam.extend(symbol)?;
//! }
//!
//! assert!(sam.contains("bcb"));
//! assert_eq!(sam.count_distinct_substrings(), 12);
//! assert_eq!(sam.longest_substring_length(), 5);
//! # Ok::<(), AutomatonError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{
        AutomatonError, OccurrenceIndex, SharedSuffixAutomaton, State, StateId,
        SuffixAutomaton, ROOT,
    };
}
