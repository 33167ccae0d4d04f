//! Value iteration over a deterministic grid world.

use log::{debug, trace};
use ndarray::Array2;

use crate::env::{Cell, GridEnv};
use crate::error::{Error, Result};

/// Computes the optimal value of every cell of a deterministic grid world.
///
/// Each sweep applies the Bellman optimality backup to every cell that is
/// neither a wall nor terminal, probing the environment with non-committing
/// step simulations. Lookups within a sweep read only the previous sweep's
/// values. Stops when the largest per-cell change falls below `theta`, or
/// after `max_iter` sweeps.
///
/// Wall and terminal cells are never updated and keep their initial value
/// of 0.0.
///
/// # Errors
/// Returns [`Error::EmptyActionSpace`] if the environment exposes no actions.
pub fn grid_world_value_iteration<E: GridEnv>(
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
            debug!("grid value iteration converged after {} sweeps", iter + 1);
            break;
        }
    }
    Ok(values)
}

fn updates(cell: Cell) -> bool {
    !cell.is_wall() && !cell.is_terminal()
}

/// One synchronous sweep over the grid; all lookups read `prev`.
fn sweep<E: GridEnv>(env: &mut E, prev: &Array2<f64>, gamma: f64) -> (Array2<f64>, f64) {
    let mut next = Array2::zeros(prev.raw_dim());
    let mut convergence = 0.0_f64;
    for row in 0..env.height() {
        for col in 0..env.width() {
            if !updates(env.cell(row, col)) {
                continue;
            }
            let mut best = f64::NEG_INFINITY;
            for action in 0..env.action_count() {
                let outcome = env.successor(row, col, action);
                let (next_row, next_col) = outcome.next_state;
                let action_value = outcome.reward + gamma * prev[[next_row, next_col]];
                if action_value > best {
                    best = action_value;
                }
            }
            next[[row, col]] = best;
            convergence = convergence.max((next[[row, col]] - prev[[row, col]]).abs());
        }
    }
    (next, convergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridOutcome;
    use ndarray::array;

    /// Minimal grid world: moves are (row, col) deltas, moves off the grid
    /// or into walls leave the agent in place, and stepping onto a terminal
    /// pays its reward and ends the episode.
    struct TestGrid {
        grid: Array2<Cell>,
        moves: Vec<(isize, isize)>,
        successor_calls: usize,
    }

    impl TestGrid {
        fn new(grid: Array2<Cell>, moves: Vec<(isize, isize)>) -> Self {
            TestGrid {
                grid,
                moves,
                successor_calls: 0,
            }
        }

        fn target(&self, row: usize, col: usize, action: usize) -> (usize, usize) {
            let (dr, dc) = self.moves[action];
            let next_row = row as isize + dr;
            let next_col = col as isize + dc;
            if next_row < 0
                || next_row >= self.grid.nrows() as isize
                || next_col < 0
                || next_col >= self.grid.ncols() as isize
            {
                return (row, col);
            }
            let (next_row, next_col) = (next_row as usize, next_col as usize);
            if self.grid[[next_row, next_col]].is_wall() {
                (row, col)
            } else {
                (next_row, next_col)
            }
        }
    }

    impl GridEnv for TestGrid {
        fn height(&self) -> usize {
            self.grid.nrows()
        }
        fn width(&self) -> usize {
            self.grid.ncols()
        }
        fn action_count(&self) -> usize {
            self.moves.len()
        }
        fn cell(&self, row: usize, col: usize) -> Cell {
            self.grid[[row, col]]
        }
        fn successor(&mut self, row: usize, col: usize, action: usize) -> GridOutcome {
            self.successor_calls += 1;
            let (next_row, next_col) = self.target(row, col, action);
            let landed = self.grid[[next_row, next_col]];
            let reward = match landed {
                Cell::Goal => 1.0,
                Cell::Pit => -1.0,
                _ => 0.0,
            };
            GridOutcome {
                next_state: (next_row, next_col),
                reward,
                done: landed.is_terminal(),
            }
        }
    }

    const UDLR: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    fn open_room() -> TestGrid {
        // Goal in the corner, wall in the middle.
        let grid = array![
            [Cell::Start, Cell::Empty, Cell::Goal],
            [Cell::Empty, Cell::Wall, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::Empty],
        ];
        TestGrid::new(grid, UDLR.to_vec())
    }

    #[test]
    fn corridor_start_and_empty_reach_the_goal() {
        let grid = array![[Cell::Start, Cell::Empty, Cell::Goal]];
        let mut env = TestGrid::new(grid, vec![(0, 1)]);
        let values = grid_world_value_iteration(&mut env, 100, 1.0, 1e-5).unwrap();

        // The goal is terminal and never updated, so its value stays 0;
        // both traversable cells collect the +1 on entry.
        assert_eq!(values, array![[1.0, 1.0, 0.0]]);
    }

    #[test]
    fn walls_and_terminals_keep_their_initial_value() {
        let mut env = open_room();
        let values = grid_world_value_iteration(&mut env, 100, 0.9, 1e-5).unwrap();

        assert_eq!(values[[1, 1]], 0.0);
        assert_eq!(values[[0, 2]], 0.0);
        for row in 0..3 {
            for col in 0..3 {
                if updates(env.cell(row, col)) {
                    assert!(values[[row, col]] > 0.0, "cell ({}, {})", row, col);
                }
            }
        }
    }

    #[test]
    fn values_grow_monotonically_across_sweeps() {
        let mut previous = {
            let mut env = open_room();
            grid_world_value_iteration(&mut env, 1, 0.9, 1e-5).unwrap()
        };
        for sweeps in 2..8 {
            let mut env = open_room();
            let current = grid_world_value_iteration(&mut env, sweeps, 0.9, 1e-5).unwrap();
            for (curr, prev) in current.iter().zip(previous.iter()) {
                assert!(curr >= prev, "value decreased: {} -> {}", prev, curr);
            }
            previous = current;
        }
    }

    #[test]
    fn sweep_is_idempotent_at_the_fixed_point() {
        let mut env = open_room();
        let converged = grid_world_value_iteration(&mut env, 100, 0.9, 1e-8).unwrap();
        let (_, convergence) = sweep(&mut env, &converged, 0.9);
        assert!(convergence < 1e-8);
    }

    #[test]
    fn never_exceeds_the_iteration_cap() {
        let grid = array![[Cell::Start, Cell::Empty, Cell::Goal]];
        let mut env = TestGrid::new(grid, vec![(0, 1)]);
        // theta = 0 never triggers the convergence exit, so exactly
        // max_iter sweeps run: 2 updatable cells times 1 action each.
        grid_world_value_iteration(&mut env, 3, 1.0, 0.0).unwrap();
        assert_eq!(env.successor_calls, 3 * 2);
    }

    #[test]
    fn empty_action_space_is_rejected() {
        let grid = array![[Cell::Start, Cell::Goal]];
        let mut env = TestGrid::new(grid, vec![]);
        let err = grid_world_value_iteration(&mut env, 10, 1.0, 1e-5).unwrap_err();
        assert!(matches!(err, Error::EmptyActionSpace));
    }
}
