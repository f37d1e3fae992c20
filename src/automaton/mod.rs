//! Online suffix automaton.
//!
//! This module implements a suffix automaton (SAM): the minimal deterministic
//! automaton accepting exactly the substrings of a text. The text is fed one
//! character at a time and the automaton is valid after every step.
//!
//! # Overview
//!
//! - **Substring Recognition**: Any path from the root spells a substring
//! - **Minimality**: At most `2n - 1` states for `n >= 2` characters
//! - **Online Construction**: Amortized O(1) state work per character
//! - **Endpos Equivalence**: States group substrings by their ending positions
//!
//! States live in a single pool and reference each other by index only, so
//! the suffix-link tree and the transition DAG never form ownership cycles.
//!
//! # Example
//!
//! ```rust
//! use libsam::automaton::SuffixAutomaton;
//!
//! let mut sam = SuffixAutomaton::new(5)?;
//! sam.push_str("abcbc")?;
//!
//! assert!(sam.contains("bcb"));
//! assert!(!sam.contains("cab"));
//! assert_eq!(sam.count_distinct_substrings(), 12);
//! assert_eq!(sam.longest_substring_length(), 5);
//!
//! // The declared capacity is a hard limit.
//! assert!(sam.extend('x').is_err());
//! # Ok::<(), libsam::automaton::AutomatonError>(())
//! ```
//!
//! # References
//!
//! - Blumer et al. (1985): "The smallest automaton recognizing the subwords of a text"

use std::fmt;

use log::{debug, trace};

pub mod error;
pub mod occurrences;
pub mod shared;
pub mod state;
pub mod validate;

pub use error::{AutomatonError, Result};
pub use occurrences::OccurrenceIndex;
pub use shared::SharedSuffixAutomaton;
pub use state::{State, StateId, ROOT};

/// Suffix automaton over a text of bounded length.
///
/// The automaton is created with a declared maximum text length and grows
/// one character at a time through [`extend`](Self::extend). Queries borrow
/// the automaton immutably; the state pool is never handed out mutably.
///
/// # Capacity
///
/// A text of `L` characters needs at most `max(2L - 1, 2)` states, so the
/// pool is reserved for `max(2L, 1)` states up front. Supplying more than `L`
/// characters fails with [`AutomatonError::CapacityExceeded`] and leaves the
/// automaton untouched.
#[derive(Clone, Debug)]
pub struct SuffixAutomaton {
    /// State pool. State 0 is the root; states are appended, never removed.
    states: Vec<State>,

    /// State of the whole text processed so far.
    last: StateId,

    /// Declared maximum number of characters.
    max_length: usize,

    /// Upper bound on the number of states.
    state_capacity: usize,
}

impl SuffixAutomaton {
    /// Create an empty automaton for texts of up to `max_length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::InvalidArgument`] if the state pool for
    /// `max_length` characters cannot be sized or reserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libsam::automaton::SuffixAutomaton;
    ///
    /// let sam = SuffixAutomaton::new(16)?;
    /// assert_eq!(sam.state_count(), 1);
    /// assert_eq!(sam.count_distinct_substrings(), 0);
    /// # Ok::<(), libsam::automaton::AutomatonError>(())
    /// ```
    pub fn new(max_length: usize) -> Result<Self> {
        let state_capacity = max_length
            .checked_mul(2)
            .ok_or(AutomatonError::InvalidArgument {
                max_length,
                reason: "state pool bound overflows usize",
            })?
            .max(1);

        let mut states = Vec::new();
        states
            .try_reserve_exact(state_capacity)
            .map_err(|_| AutomatonError::InvalidArgument {
                max_length,
                reason: "state pool cannot be allocated",
            })?;
        states.push(State::root());

        debug!(
            "created suffix automaton: max_length={}, state_capacity={}",
            max_length, state_capacity
        );

        Ok(Self {
            states,
            last: ROOT,
            max_length,
            state_capacity,
        })
    }

    /// Build an automaton sized exactly for `text` and feed it the whole text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libsam::automaton::SuffixAutomaton;
    ///
    /// let sam = SuffixAutomaton::from_text("aaaa")?;
    /// assert_eq!(sam.count_distinct_substrings(), 4);
    /// assert_eq!(sam.remaining(), 0);
    /// # Ok::<(), libsam::automaton::AutomatonError>(())
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        let mut sam = Self::new(text.chars().count())?;
        sam.push_str(text)?;
        Ok(sam)
    }

    /// Extend the automaton with one character (online construction).
    ///
    /// # Algorithm
    ///
    /// 1. Create a state `cur` for the whole new text
    /// 2. Walk suffix links back from `last`, adding transitions to `cur`
    ///    until a state already has a transition on `symbol`
    /// 3. Link `cur` to that transition's target, splitting the target's
    ///    class with a clone when its longest string is too long
    /// 4. Make `cur` the new `last`
    ///
    /// The suffix-link walk is done once read-only before anything is
    /// written, so the capacity checks happen while the automaton is still
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::CapacityExceeded`] when `max_length`
    /// characters have already been processed or the state pool is full.
    pub fn extend(&mut self, symbol: char) -> Result<()> {
        let length = self.len();
        if length >= self.max_length {
            debug!(
                "rejecting {:?}: declared maximum length {} reached",
                symbol, self.max_length
            );
            return Err(self.capacity_exceeded(1));
        }

        // First ancestor (p, q) of `last` with a transition p --symbol--> q.
        let mut found = None;
        let mut p = Some(self.last);
        while let Some(p_idx) = p {
            if let Some(q) = self.states[p_idx].find_edge(symbol) {
                found = Some((p_idx, q));
                break;
            }
            p = self.states[p_idx].link;
        }

        let needs_clone = match found {
            Some((p_idx, q)) => self.states[p_idx].length + 1 != self.states[q].length,
            None => false,
        };
        let new_states = if needs_clone { 2 } else { 1 };
        if self.states.len() + new_states > self.state_capacity {
            debug!(
                "rejecting {:?}: state pool full ({} of {} states)",
                symbol,
                self.states.len(),
                self.state_capacity
            );
            return Err(self.capacity_exceeded(1));
        }

        let cur = self.states.len();
        self.states.push(State::primary(length + 1, length));

        let stop = found.map(|(p_idx, _)| p_idx);
        let mut p = Some(self.last);
        while let Some(p_idx) = p {
            if Some(p_idx) == stop {
                break;
            }
            self.states[p_idx].add_edge(symbol, cur);
            p = self.states[p_idx].link;
        }

        let link = match found {
            None => ROOT,
            Some((_, q)) if !needs_clone => q,
            Some((p_idx, q)) => self.split(p_idx, q, symbol),
        };
        self.states[cur].link = Some(link);
        self.last = cur;

        Ok(())
    }

    /// Split the class of `q` so that `p --symbol-->` reaches a state whose
    /// longest string has length `length(p) + 1`. Returns the clone.
    fn split(&mut self, p: StateId, q: StateId, symbol: char) -> StateId {
        let clone = self.states.len();
        let cloned = State::clone_of(&self.states[q], self.states[p].length + 1);
        self.states.push(cloned);

        let mut redirected = 0usize;
        let mut ancestor = Some(p);
        while let Some(a) = ancestor {
            if !self.states[a].redirect_edge(symbol, q, clone) {
                break;
            }
            redirected += 1;
            ancestor = self.states[a].link;
        }

        self.states[q].link = Some(clone);

        trace!(
            "split state {} on {:?}: clone {} (length {}), {} transitions redirected",
            q,
            symbol,
            clone,
            self.states[clone].length,
            redirected
        );

        clone
    }

    /// Extend the automaton with every character of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::CapacityExceeded`] without modifying the
    /// automaton if `text` does not fit in the remaining capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libsam::automaton::SuffixAutomaton;
    ///
    /// let mut sam = SuffixAutomaton::new(4)?;
    /// sam.push_str("ab")?;
    /// assert!(sam.push_str("cde").is_err());
    /// assert_eq!(sam.len(), 2);
    /// # Ok::<(), libsam::automaton::AutomatonError>(())
    /// ```
    pub fn push_str(&mut self, text: &str) -> Result<()> {
        let requested = text.chars().count();
        if requested > self.remaining() {
            debug!(
                "rejecting text of {} characters: only {} remaining",
                requested,
                self.remaining()
            );
            return Err(self.capacity_exceeded(requested));
        }
        for symbol in text.chars() {
            self.extend(symbol)?;
        }
        Ok(())
    }

    fn capacity_exceeded(&self, requested: usize) -> AutomatonError {
        AutomatonError::CapacityExceeded {
            max_length: self.max_length,
            length: self.len(),
            requested,
        }
    }

    /// Check whether `pattern` is a substring of the processed text.
    ///
    /// The empty pattern is always contained.
    pub fn contains(&self, pattern: &str) -> bool {
        self.walk(pattern.chars()).is_some()
    }

    /// Check whether the character sequence `pattern` is a substring of the
    /// processed text.
    pub fn contains_chars<I>(&self, pattern: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        self.walk(pattern).is_some()
    }

    /// Follow `pattern` from the root. Returns the state reached, or `None`
    /// as soon as a transition is missing.
    pub(crate) fn walk<I>(&self, pattern: I) -> Option<StateId>
    where
        I: IntoIterator<Item = char>,
    {
        pattern
            .into_iter()
            .try_fold(ROOT, |state, symbol| self.states[state].find_edge(symbol))
    }

    /// Number of distinct non-empty substrings of the processed text.
    ///
    /// Each non-root state contributes the lengths `(length(link), length]`
    /// of its class, so this is one linear pass over the pool.
    pub fn count_distinct_substrings(&self) -> u64 {
        self.states
            .iter()
            .skip(1)
            .map(|state| {
                let link_length = state.link.map_or(0, |link| self.states[link].length);
                (state.length - link_length) as u64
            })
            .sum()
    }

    /// Length of the whole text processed so far.
    ///
    /// This is the number of successful [`extend`](Self::extend) calls, not
    /// the length of the longest repeated substring.
    pub fn longest_substring_length(&self) -> usize {
        self.states[self.last].length
    }

    /// Number of characters processed so far.
    pub fn len(&self) -> usize {
        self.longest_substring_length()
    }

    /// True if no characters have been processed.
    pub fn is_empty(&self) -> bool {
        self.last == ROOT
    }

    /// Declared maximum number of characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Characters that can still be appended.
    pub fn remaining(&self) -> usize {
        self.max_length - self.len()
    }

    /// Number of allocated states, clones and the root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Upper bound on the number of states this automaton may allocate.
    pub fn state_capacity(&self) -> usize {
        self.state_capacity
    }

    /// State representing the whole processed text.
    pub fn last(&self) -> StateId {
        self.last
    }

    /// Look up a state by index.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states in allocation order, root first.
    pub fn states(&self) -> impl ExactSizeIterator<Item = &State> + '_ {
        self.states.iter()
    }
}

impl fmt::Display for SuffixAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Suffix automaton with {} states ({} characters, last={}):",
            self.states.len(),
            self.len(),
            self.last
        )?;
        for (idx, state) in self.states.iter().enumerate() {
            let link = match state.link {
                Some(link) => link.to_string(),
                None => "-".to_string(),
            };
            let edges: Vec<String> = state
                .transitions()
                .map(|(symbol, target)| format!("{:?}->{}", symbol, target))
                .collect();
            writeln!(
                f,
                "  State {}: len={}, link={}{}, edges=[{}]",
                idx,
                state.length,
                link,
                if state.is_clone { ", clone" } else { "" },
                edges.join(", ")
            )?;
        }
        Ok(())
    }
}
