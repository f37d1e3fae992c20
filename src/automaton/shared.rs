//! Thread-safe handle to a suffix automaton.
//!
//! Extensions take the write lock for their whole duration, so readers only
//! ever observe the automaton between completed extensions.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::automaton::error::Result;
use crate::automaton::SuffixAutomaton;

/// Shared, clonable handle to a [`SuffixAutomaton`].
///
/// Clones share the same automaton. One writer at a time may extend it;
/// any number of readers may query it while no extension is running.
///
/// # Examples
///
/// ```rust
/// use libsam::automaton::SharedSuffixAutomaton;
///
/// let sam = SharedSuffixAutomaton::new(32)?;
/// let reader = sam.clone();
///
/// sam.push_str("concurrent")?;
/// assert!(reader.contains("curr"));
/// # Ok::<(), libsam::automaton::AutomatonError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SharedSuffixAutomaton {
    inner: Arc<RwLock<SuffixAutomaton>>,
}

impl SharedSuffixAutomaton {
    /// Create an empty shared automaton for texts of up to `max_length`
    /// characters.
    pub fn new(max_length: usize) -> Result<Self> {
        Ok(Self::from_automaton(SuffixAutomaton::new(max_length)?))
    }

    /// Share an existing automaton.
    pub fn from_automaton(automaton: SuffixAutomaton) -> Self {
        Self {
            inner: Arc::new(RwLock::new(automaton)),
        }
    }

    /// Extend with one character. See [`SuffixAutomaton::extend`].
    pub fn extend(&self, symbol: char) -> Result<()> {
        self.inner.write().extend(symbol)
    }

    /// Extend with a whole text under a single write lock.
    /// See [`SuffixAutomaton::push_str`].
    pub fn push_str(&self, text: &str) -> Result<()> {
        self.inner.write().push_str(text)
    }

    /// See [`SuffixAutomaton::contains`].
    pub fn contains(&self, pattern: &str) -> bool {
        self.inner.read().contains(pattern)
    }

    /// See [`SuffixAutomaton::count_distinct_substrings`].
    pub fn count_distinct_substrings(&self) -> u64 {
        self.inner.read().count_distinct_substrings()
    }

    /// See [`SuffixAutomaton::longest_substring_length`].
    pub fn longest_substring_length(&self) -> usize {
        self.inner.read().longest_substring_length()
    }

    /// See [`SuffixAutomaton::state_count`].
    pub fn state_count(&self) -> usize {
        self.inner.read().state_count()
    }

    /// Read-only view for running several queries against one snapshot.
    ///
    /// Extensions block while the guard is alive.
    pub fn read(&self) -> RwLockReadGuard<'_, SuffixAutomaton> {
        self.inner.read()
    }

    /// Take the automaton back if this is the last handle.
    ///
    /// Returns the handle unchanged when other clones are still alive.
    pub fn try_into_inner(self) -> std::result::Result<SuffixAutomaton, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<SuffixAutomaton> for SharedSuffixAutomaton {
    fn from(automaton: SuffixAutomaton) -> Self {
        Self::from_automaton(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let sam = SharedSuffixAutomaton::new(8).unwrap();
        let other = sam.clone();
        other.push_str("abab").unwrap();
        assert_eq!(sam.longest_substring_length(), 4);
        assert_eq!(sam.count_distinct_substrings(), 7);
        assert!(sam.contains("bab"));
    }

    #[test]
    fn test_readers_see_completed_extensions_only() {
        let text = "abcbcabcbbcaabacbbbca";
        let sam = SharedSuffixAutomaton::new(text.len()).unwrap();

        thread::scope(|scope| {
            let writer = sam.clone();
            scope.spawn(move || {
                for symbol in text.chars() {
                    writer.extend(symbol).unwrap();
                }
            });

            for _ in 0..4 {
                let reader = sam.clone();
                scope.spawn(move || {
                    for _ in 0..200 {
                        let snapshot = reader.read();
                        snapshot.validate().unwrap();
                        let n = snapshot.len();
                        assert!(snapshot.contains(&text[..n]));
                    }
                });
            }
        });

        assert_eq!(sam.longest_substring_length(), text.len());
    }

    #[test]
    fn test_try_into_inner() {
        let sam = SharedSuffixAutomaton::from(SuffixAutomaton::from_text("xyz").unwrap());
        let other = sam.clone();
        let sam = sam.try_into_inner().unwrap_err();
        drop(other);
        let automaton = sam.try_into_inner().unwrap();
        assert_eq!(automaton.len(), 3);
    }

    #[test]
    fn test_capacity_error_propagates() {
        let sam = SharedSuffixAutomaton::new(1).unwrap();
        sam.extend('a').unwrap();
        assert!(sam.extend('b').is_err());
        assert_eq!(sam.state_count(), 2);
    }
}
