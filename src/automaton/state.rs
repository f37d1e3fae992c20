//! States of the suffix automaton.

use smallvec::SmallVec;

/// Index of a state in the automaton's state pool.
///
/// State `0` is always the root.
pub type StateId = usize;

/// Index of the root state.
pub const ROOT: StateId = 0;

/// Edge count at which `find_edge` switches from a linear scan to binary search.
const BINARY_SEARCH_THRESHOLD: usize = 16;

/// A state in the suffix automaton.
///
/// Each state represents one endpos-equivalence class: the substrings that
/// end at exactly the same set of positions in the processed text. The class
/// covers the string lengths `(length(link), length]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    /// Outgoing edges: (symbol, target state index), sorted by symbol.
    pub(crate) edges: SmallVec<[(char, StateId); 4]>,

    /// Suffix link. `None` only for the root.
    pub(crate) link: Option<StateId>,

    /// Length of the longest string in this equivalence class.
    pub(crate) length: usize,

    /// End position (char index) of the first occurrence of this class.
    ///
    /// Meaningless for the root.
    pub(crate) first_end: usize,

    /// True if this state was created by splitting another state.
    pub(crate) is_clone: bool,
}

impl State {
    /// Create the root state.
    pub(crate) fn root() -> Self {
        Self {
            edges: SmallVec::new(),
            link: None,
            length: 0,
            first_end: 0,
            is_clone: false,
        }
    }

    /// Create the primary state for the character ending at `end`.
    pub(crate) fn primary(length: usize, end: usize) -> Self {
        Self {
            edges: SmallVec::new(),
            link: None,
            length,
            first_end: end,
            is_clone: false,
        }
    }

    /// Create a clone of `source` with a shorter longest string.
    ///
    /// The clone takes over `source`'s transitions, suffix link and first
    /// occurrence.
    pub(crate) fn clone_of(source: &State, length: usize) -> Self {
        Self {
            edges: source.edges.clone(),
            link: source.link,
            length,
            first_end: source.first_end,
            is_clone: true,
        }
    }

    /// Length of the longest string in this state's class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Suffix link target, or `None` for the root.
    pub fn link(&self) -> Option<StateId> {
        self.link
    }

    /// Whether the state was produced by a class split.
    pub fn is_clone(&self) -> bool {
        self.is_clone
    }

    /// End position (char index) of the leftmost occurrence of this class.
    pub fn first_end(&self) -> usize {
        self.first_end
    }

    /// Target of the transition on `symbol`, if any.
    pub fn transition(&self, symbol: char) -> Option<StateId> {
        self.find_edge(symbol)
    }

    /// Outgoing transitions in ascending symbol order.
    pub fn transitions(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.edges.iter().copied()
    }

    /// Find an edge by label.
    ///
    /// Linear search for small edge counts, binary search for larger.
    pub(crate) fn find_edge(&self, label: char) -> Option<StateId> {
        if self.edges.len() < BINARY_SEARCH_THRESHOLD {
            self.edges
                .iter()
                .find(|(c, _)| *c == label)
                .map(|(_, t)| *t)
        } else {
            self.edges
                .binary_search_by_key(&label, |(c, _)| *c)
                .ok()
                .map(|idx| self.edges[idx].1)
        }
    }

    /// Add an edge, maintaining sorted order.
    pub(crate) fn add_edge(&mut self, label: char, target: StateId) {
        match self.edges.binary_search_by_key(&label, |(c, _)| *c) {
            Ok(idx) => self.edges[idx].1 = target,
            Err(idx) => self.edges.insert(idx, (label, target)),
        }
    }

    /// Point the edge on `label` at `new_target` if it currently points at
    /// `old_target`. Returns whether the edge was redirected.
    pub(crate) fn redirect_edge(
        &mut self,
        label: char,
        old_target: StateId,
        new_target: StateId,
    ) -> bool {
        match self.edges.binary_search_by_key(&label, |(c, _)| *c) {
            Ok(idx) if self.edges[idx].1 == old_target => {
                self.edges[idx].1 = new_target;
                true
            }
            _ => false,
        }
    }
}
