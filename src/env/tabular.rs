//! Tabular MDP collaborators: an enumerable state/action space with a
//! deterministic transition function.

use crate::error::{Error, Result};

/// A finite MDP with deterministic transitions, queried by the tabular solver.
///
/// Implementations expose enumerable state and action spaces (indexed
/// `0..state_count` and `0..action_count`) and a transition function mapping
/// a (state, action) pair to a single successor.
pub trait TabularMdp {
    /// Number of states in the MDP
    fn state_count(&self) -> usize;

    /// Number of actions, assumed available in every state
    fn action_count(&self) -> usize;

    /// The successor of taking `action` in `state`: (next state, reward, done flag)
    fn transition(&self, state: usize, action: usize) -> (usize, f64, bool);
}

/// A [`TabularMdp`] backed by an explicit transition table.
///
/// `transitions[s][a]` holds the `(next_state, reward, done)` outcome of
/// taking action `a` in state `s`. Terminal states are encoded in the table
/// itself, typically as absorbing self-loops with zero reward.
#[derive(Debug, Clone)]
pub struct TableMdp {
    transitions: Vec<Vec<(usize, f64, bool)>>,
    action_count: usize,
}

impl TableMdp {
    /// Creates a table-backed MDP from an explicit transition table.
    ///
    /// # Errors
    /// Returns [`Error::EmptyActionSpace`] if the table has states but no
    /// actions, and [`Error::InvalidInput`] if rows have inconsistent
    /// lengths or any next-state index is out of range.
    pub fn new(transitions: Vec<Vec<(usize, f64, bool)>>) -> Result<Self> {
        let state_count = transitions.len();
        let action_count = transitions.first().map_or(0, Vec::len);
        if state_count > 0 && action_count == 0 {
            return Err(Error::EmptyActionSpace);
        }
        for (s, row) in transitions.iter().enumerate() {
            if row.len() != action_count {
                return Err(Error::InvalidInput(format!(
                    "state {} has {} actions, expected {}",
                    s,
                    row.len(),
                    action_count
                )));
            }
            for &(next, _, _) in row {
                if next >= state_count {
                    return Err(Error::InvalidInput(format!(
                        "state {} transitions to out-of-range state {}",
                        s, next
                    )));
                }
            }
        }

        Ok(Self {
            transitions,
            action_count,
        })
    }
}

impl TabularMdp for TableMdp {
    fn state_count(&self) -> usize {
        self.transitions.len()
    }

    fn action_count(&self) -> usize {
        self.action_count
    }

    fn transition(&self, state: usize, action: usize) -> (usize, f64, bool) {
        self.transitions[state][action]
    }
}
