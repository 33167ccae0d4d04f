//! Value iteration over a tabular MDP with an explicit transition table.

use log::{debug, trace};
use ndarray::Array1;

use crate::env::TabularMdp;
use crate::error::{Error, Result};

/// Convergence tolerance for the tabular solver: a sweep that changes no
/// state's value by more than this terminates the iteration.
const TOLERANCE: f64 = 0.01;

/// Computes the optimal state-value function of a tabular MDP.
///
/// Runs synchronous value iteration: every sweep applies the Bellman
/// optimality backup `max_a [ r(s, a) + gamma * V(s') ]` to every state,
/// reading only the previous sweep's values. Stops once all per-state
/// changes fall below 0.01, or after `max_iter` sweeps.
///
/// # Arguments
/// - `mdp`: the MDP collaborator
/// - `max_iter`: maximum number of sweeps (at least 1)
/// - `gamma`: discount factor, normally in `[0, 1]`; not validated
///
/// # Errors
/// Returns [`Error::EmptyActionSpace`] if the MDP exposes no actions.
///
/// # Examples
///
/// ```
/// use mdp_value_iteration::{mdp_value_iteration, TableMdp};
///
/// // Two states: state 0 can stay for +1 or move to state 1 for 0;
/// // state 1 is absorbing with +2 per step.
/// let mdp = TableMdp::new(vec![
///     vec![(0, 1.0, false), (1, 0.0, false)],
///     vec![(1, 2.0, false), (1, 2.0, false)],
/// ])
/// .unwrap();
///
/// let values = mdp_value_iteration(&mdp, 1000, 0.9).unwrap();
/// assert!(values[1] > values[0]);
/// ```
pub fn mdp_value_iteration<M: TabularMdp>(
    mdp: &M,
    max_iter: usize,
    gamma: f64,
) -> Result<Array1<f64>> {
    if mdp.action_count() == 0 {
        return Err(Error::EmptyActionSpace);
    }

    let mut values = Array1::zeros(mdp.state_count());
    for iter in 0..max_iter {
        let (new_values, delta) = sweep(mdp, &values, gamma);
        values = new_values;
        trace!("sweep {}: max value change {:.6}", iter + 1, delta);
        if delta < TOLERANCE {
            debug!("tabular value iteration converged after {} sweeps", iter + 1);
            break;
        }
    }
    Ok(values)
}

/// One synchronous Bellman sweep: all lookups read `prev`, the previous
/// sweep's values. Returns the updated table and the maximum absolute
/// per-state change.
fn sweep<M: TabularMdp>(mdp: &M, prev: &Array1<f64>, gamma: f64) -> (Array1<f64>, f64) {
    let mut next = Array1::zeros(prev.len());
    let mut delta = 0.0_f64;
    for state in 0..mdp.state_count() {
        let mut best = f64::NEG_INFINITY;
        for action in 0..mdp.action_count() {
            let (next_state, reward, _done) = mdp.transition(state, action);
            let action_value = reward + gamma * prev[next_state];
            if action_value > best {
                best = action_value;
            }
        }
        next[state] = best;
        delta = delta.max((next[state] - prev[state]).abs());
    }
    (next, delta)
}
