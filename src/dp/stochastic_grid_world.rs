//! Value iteration over a stochastic grid world.
//!
//! Differs from the deterministic variant in the backup: each action's value
//! is an expectation over its outcome distribution, optionally weighted by
//! the environment's intended-direction probability.

use log::{debug, trace};
use ndarray::Array2;

use crate::env::{Cell, StochasticGridEnv};
use crate::error::{Error, Result};

/// Computes the optimal value of every cell of a stochastic grid world.
///
/// Identical sweep and termination policy to
/// [`grid_world_value_iteration`](crate::dp::grid_world_value_iteration),
/// with the per-cell backup delegated to [`value_iteration_per_state`].
///
/// # Errors
/// Returns [`Error::EmptyActionSpace`] if the environment exposes no actions.
pub fn stochastic_grid_world_value_iteration<E: StochasticGridEnv>(
    env: &mut E,
    max_iter: usize,
    gamma: f64,
    theta: f64,
) -> Result<Array2<f64>> {
    if env.action_count() == 0 {
        return Err(Error::EmptyActionSpace);
    }

    let mut values = Array2::zeros((env.height(), env.width()));
    for iter in 0..max_iter {
        let (new_values, convergence) = sweep(env, &values, gamma);
        values = new_values;
        trace!("sweep {}: max value change {:.6}", iter + 1, convergence);
        if convergence < theta {
            debug!(
                "stochastic grid value iteration converged after {} sweeps",
                iter + 1
            );
            break;
        }
    }
    Ok(values)
}

/// Applies the Bellman optimality backup to the single cell `(row, col)`,
/// writing the result into `values` and returning the updated convergence
/// delta.
///
/// Each action's value is the sum over its outcomes of
/// `outcome probability * intended-direction probability * (reward + gamma *
/// prev value)`; the cell's new value is the maximum over actions, starting
/// from negative infinity. All value lookups read `prev`, the previous
/// sweep's snapshot.
pub fn value_iteration_per_state<E: StochasticGridEnv>(
    env: &mut E,
    row: usize,
    col: usize,
    values: &mut Array2<f64>,
    prev: &Array2<f64>,
    gamma: f64,
    delta: f64,
) -> f64 {
    values[[row, col]] = f64::NEG_INFINITY;
    for action in 0..env.action_count() {
        let move_prob = env.move_probability(row, col, action);
        let mut expected = 0.0;
        for outcome in env.outcomes(row, col, action) {
            let (next_row, next_col) = outcome.next_state;
            expected += outcome.probability
                * move_prob
                * (outcome.reward + gamma * prev[[next_row, next_col]]);
        }
        if expected > values[[row, col]] {
            values[[row, col]] = expected;
        }
    }
    delta.max((values[[row, col]] - prev[[row, col]]).abs())
}

fn updates(cell: Cell) -> bool {
    !cell.is_wall() && !cell.is_terminal()
}

/// One synchronous sweep over the grid; all lookups read `prev`.
fn sweep<E: StochasticGridEnv>(env: &mut E, prev: &Array2<f64>, gamma: f64) -> (Array2<f64>, f64) {
    let mut next = Array2::zeros(prev.raw_dim());
    let mut convergence = 0.0_f64;
    for row in 0..env.height() {
        for col in 0..env.width() {
            if !updates(env.cell(row, col)) {
                continue;
            }
            convergence =
                value_iteration_per_state(env, row, col, &mut next, prev, gamma, convergence);
        }
    }
    (next, convergence)
}
