//! Structural self-check of a suffix automaton.

use crate::automaton::error::{AutomatonError, Result};
use crate::automaton::state::{StateId, ROOT};
use crate::automaton::SuffixAutomaton;

fn violation(state: StateId, reason: impl Into<String>) -> AutomatonError {
    AutomatonError::InvariantViolation {
        state,
        reason: reason.into(),
    }
}

/// Most states a suffix automaton over `n` characters can have.
pub fn max_states(n: usize) -> usize {
    match n {
        0 => 1,
        1 => 2,
        _ => 2 * n - 1,
    }
}

impl SuffixAutomaton {
    /// Verify the structural invariants of the automaton.
    ///
    /// Checks that the root is state 0 with length 0 and no suffix link, that
    /// every other state links to an existing, strictly shorter state (so the
    /// links form a tree rooted at 0), that transition tables are sorted,
    /// deterministic and point at existing, longer states, and that the state
    /// count respects the `2n - 1` bound and the declared pool.
    ///
    /// Construction maintains all of these; this is a debugging aid.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::InvariantViolation`] naming the first
    /// offending state.
    pub fn validate(&self) -> Result<()> {
        let states = &self.states;
        let root = states
            .first()
            .ok_or_else(|| violation(ROOT, "state pool is empty"))?;
        if root.length != 0 || root.link.is_some() || root.is_clone {
            return Err(violation(ROOT, "root must have length 0 and no suffix link"));
        }

        for (id, state) in states.iter().enumerate() {
            if id != ROOT {
                let link = state
                    .link
                    .ok_or_else(|| violation(id, "missing suffix link"))?;
                let target = states
                    .get(link)
                    .ok_or_else(|| violation(id, format!("suffix link to unknown state {}", link)))?;
                if target.length >= state.length {
                    return Err(violation(
                        id,
                        format!(
                            "suffix link target {} has length {} >= {}",
                            link, target.length, state.length
                        ),
                    ));
                }
            }

            if state.edges.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
                return Err(violation(id, "transitions are not strictly sorted"));
            }
            for &(symbol, target) in &state.edges {
                let next = states.get(target).ok_or_else(|| {
                    violation(id, format!("transition {:?} to unknown state {}", symbol, target))
                })?;
                if next.length <= state.length {
                    return Err(violation(
                        id,
                        format!("transition {:?} does not lengthen the string", symbol),
                    ));
                }
            }
        }

        let last = &states[self.last];
        if self.last != ROOT && last.is_clone {
            return Err(violation(self.last, "last state is a clone"));
        }
        if states.len() > max_states(self.len()) {
            return Err(violation(
                self.last,
                format!(
                    "{} states exceed the bound of {} for {} characters",
                    states.len(),
                    max_states(self.len()),
                    self.len()
                ),
            ));
        }
        if states.len() > self.state_capacity {
            return Err(violation(self.last, "state pool exceeds its declared capacity"));
        }

        Ok(())
    }
}
