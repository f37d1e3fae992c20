//! Aggregate queries over endpos-equivalence classes.
//!
//! Nothing here materializes endpos sets. Occurrence counts are folded up the
//! suffix-link tree, and first occurrences come from the end position each
//! state records when it is created.

use crate::automaton::state::{StateId, ROOT};
use crate::automaton::SuffixAutomaton;

/// Occurrence counts for every state of a [`SuffixAutomaton`].
///
/// Built in O(states) by [`SuffixAutomaton::occurrences`]. Holds a shared
/// borrow, so the counts cannot go stale.
///
/// # Examples
///
/// ```rust
/// use libsam::automaton::SuffixAutomaton;
///
/// let sam = SuffixAutomaton::from_text("abracadabra")?;
/// let index = sam.occurrences();
/// assert_eq!(index.count("a"), 5);
/// assert_eq!(index.count("abra"), 2);
/// assert_eq!(index.count("cab"), 0);
/// # Ok::<(), libsam::automaton::AutomatonError>(())
/// ```
#[derive(Debug)]
pub struct OccurrenceIndex<'a> {
    automaton: &'a SuffixAutomaton,
    counts: Vec<usize>,
}

impl<'a> OccurrenceIndex<'a> {
    fn build(automaton: &'a SuffixAutomaton) -> Self {
        let states = &automaton.states;

        // Counting sort by length: parents in the link tree are strictly shorter.
        let mut buckets = vec![0usize; automaton.len() + 2];
        for state in states {
            buckets[state.length + 1] += 1;
        }
        for i in 1..buckets.len() {
            buckets[i] += buckets[i - 1];
        }
        let mut order = vec![ROOT; states.len()];
        for (id, state) in states.iter().enumerate() {
            order[buckets[state.length]] = id;
            buckets[state.length] += 1;
        }

        // Every primary state is the end of exactly one prefix.
        let mut counts: Vec<usize> = states
            .iter()
            .enumerate()
            .map(|(id, state)| usize::from(id != ROOT && !state.is_clone))
            .collect();
        for &id in order.iter().rev() {
            if let Some(link) = states[id].link {
                counts[link] += counts[id];
            }
        }

        Self { automaton, counts }
    }

    /// Number of (possibly overlapping) occurrences of `pattern`.
    ///
    /// The empty pattern occurs at every one of the `len() + 1` positions.
    pub fn count(&self, pattern: &str) -> usize {
        match self.automaton.walk(pattern.chars()) {
            Some(ROOT) => self.automaton.len() + 1,
            Some(state) => self.counts[state],
            None => 0,
        }
    }

    /// Size of the endpos class of `state`, or `None` for an unknown state.
    pub fn class_size(&self, state: StateId) -> Option<usize> {
        if state == ROOT {
            return Some(self.automaton.len() + 1);
        }
        self.counts.get(state).copied()
    }
}

impl SuffixAutomaton {
    /// Compute occurrence counts for every state.
    pub fn occurrences(&self) -> OccurrenceIndex<'_> {
        OccurrenceIndex::build(self)
    }

    /// Number of (possibly overlapping) occurrences of `pattern`.
    ///
    /// Rebuilds the occurrence counts on every call; use
    /// [`occurrences`](Self::occurrences) for repeated queries.
    pub fn count_occurrences(&self, pattern: &str) -> usize {
        match self.walk(pattern.chars()) {
            None => 0,
            Some(ROOT) => self.len() + 1,
            Some(_) => self.occurrences().count(pattern),
        }
    }

    /// Start index, in characters, of the leftmost occurrence of `pattern`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libsam::automaton::SuffixAutomaton;
    ///
    /// let sam = SuffixAutomaton::from_text("mississippi")?;
    /// assert_eq!(sam.first_occurrence("ssi"), Some(2));
    /// assert_eq!(sam.first_occurrence("ppi"), Some(8));
    /// assert_eq!(sam.first_occurrence("spa"), None);
    /// # Ok::<(), libsam::automaton::AutomatonError>(())
    /// ```
    pub fn first_occurrence(&self, pattern: &str) -> Option<usize> {
        let state = self.walk(pattern.chars())?;
        if state == ROOT {
            return Some(0);
        }
        Some(self.states[state].first_end + 1 - pattern.chars().count())
    }

    /// Longest string that is a substring of both the processed text and
    /// `other`. Ties resolve to the leftmost candidate in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libsam::automaton::SuffixAutomaton;
    ///
    /// let sam = SuffixAutomaton::from_text("xabcdey")?;
    /// assert_eq!(sam.longest_common_substring("zzbcdq"), "bcd");
    /// assert_eq!(sam.longest_common_substring("qqq"), "");
    /// # Ok::<(), libsam::automaton::AutomatonError>(())
    /// ```
    pub fn longest_common_substring(&self, other: &str) -> String {
        let symbols: Vec<char> = other.chars().collect();
        let mut state = ROOT;
        let mut matched = 0usize;
        let mut best_length = 0usize;
        let mut best_end = 0usize;

        for (i, &symbol) in symbols.iter().enumerate() {
            loop {
                if let Some(next) = self.states[state].find_edge(symbol) {
                    state = next;
                    matched += 1;
                    break;
                }
                match self.states[state].link {
                    Some(link) => {
                        state = link;
                        matched = self.states[link].length;
                    }
                    None => {
                        matched = 0;
                        break;
                    }
                }
            }
            if matched > best_length {
                best_length = matched;
                best_end = i + 1;
            }
        }

        symbols[best_end - best_length..best_end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_count(text: &str, pattern: &str) -> usize {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return text.len() + 1;
        }
        text.windows(pattern.len())
            .filter(|window| *window == pattern.as_slice())
            .count()
    }

    #[test]
    fn test_counts_match_naive() {
        let text = "abcbcabcbbca";
        let sam = SuffixAutomaton::from_text(text).unwrap();
        let index = sam.occurrences();
        for pattern in ["", "a", "b", "c", "bc", "cb", "abc", "bcb", "cbb", "bca", "zz", "abcbcabcbbca"] {
            assert_eq!(
                index.count(pattern),
                naive_count(text, pattern),
                "pattern {:?}",
                pattern
            );
            assert_eq!(sam.count_occurrences(pattern), naive_count(text, pattern));
        }
    }

    #[test]
    fn test_overlapping_occurrences() {
        let sam = SuffixAutomaton::from_text("aaaa").unwrap();
        assert_eq!(sam.count_occurrences("a"), 4);
        assert_eq!(sam.count_occurrences("aa"), 3);
        assert_eq!(sam.count_occurrences("aaaa"), 1);
        assert_eq!(sam.count_occurrences("aaaaa"), 0);
    }

    #[test]
    fn test_counts_on_empty_automaton() {
        let sam = SuffixAutomaton::new(3).unwrap();
        assert_eq!(sam.count_occurrences(""), 1);
        assert_eq!(sam.count_occurrences("a"), 0);
        assert_eq!(sam.occurrences().class_size(ROOT), Some(1));
        assert_eq!(sam.occurrences().class_size(5), None);
    }

    #[test]
    fn test_first_occurrence_through_clones() {
        // "b" is first seen at 1, then its class is split when "bb" appears.
        let sam = SuffixAutomaton::from_text("abbab").unwrap();
        assert_eq!(sam.first_occurrence(""), Some(0));
        assert_eq!(sam.first_occurrence("b"), Some(1));
        assert_eq!(sam.first_occurrence("bb"), Some(1));
        assert_eq!(sam.first_occurrence("ba"), Some(2));
        assert_eq!(sam.first_occurrence("ab"), Some(0));
        assert_eq!(sam.first_occurrence("bab"), Some(2));
        assert_eq!(sam.first_occurrence("aa"), None);
    }

    #[test]
    fn test_first_occurrence_unicode_offsets() {
        let sam = SuffixAutomaton::from_text("ääbä").unwrap();
        assert_eq!(sam.first_occurrence("bä"), Some(2));
    }

    #[test]
    fn test_longest_common_substring() {
        let sam = SuffixAutomaton::from_text("the quick brown fox").unwrap();
        assert_eq!(sam.longest_common_substring("a quick fix"), " quick ");
        assert_eq!(sam.longest_common_substring(""), "");
        assert_eq!(sam.longest_common_substring("the quick brown fox"), "the quick brown fox");

        let empty = SuffixAutomaton::new(0).unwrap();
        assert_eq!(empty.longest_common_substring("anything"), "");
    }

    #[test]
    fn test_longest_common_substring_prefers_leftmost() {
        let sam = SuffixAutomaton::from_text("abcxyz").unwrap();
        assert_eq!(sam.longest_common_substring("xyzabc"), "xyz");
    }
}
