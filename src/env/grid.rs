//! Grid-world collaborator interfaces.
//!
//! Grid solvers ask "what would happen if I took action `a` from cell
//! `(r, c)`" through pure successor queries. Implementations that internally
//! track a current position must hide the set-position/step choreography
//! behind these methods; any position mutation they perform while answering
//! must not be observable after the call returns.

/// Per-cell classification of a grid world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Ordinary traversable cell
    Empty,
    /// The agent's starting cell, traversable like [`Cell::Empty`]
    Start,
    /// Impassable cell
    Wall,
    /// Positive terminal cell
    Goal,
    /// Negative terminal cell
    Pit,
}

impl Cell {
    /// Whether the cell is impassable
    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Whether the cell ends an episode on entry
    pub fn is_terminal(&self) -> bool {
        matches!(self, Cell::Goal | Cell::Pit)
    }
}

/// The result of simulating one step in a deterministic grid world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOutcome {
    /// Cell the agent would land in, as (row, col)
    pub next_state: (usize, usize),
    /// Reward collected by the move
    pub reward: f64,
    /// Whether the move ends the episode
    pub done: bool,
}

/// One weighted outcome of an action in a stochastic grid world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochasticOutcome {
    /// Cell the agent would land in, as (row, col)
    pub next_state: (usize, usize),
    /// Reward collected by the move
    pub reward: f64,
    /// Probability of this outcome given the action
    pub probability: f64,
    /// Whether the move ends the episode
    pub done: bool,
}

/// A deterministic grid world queried by the grid solver.
pub trait GridEnv {
    /// Number of rows
    fn height(&self) -> usize;

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of actions available in every cell
    fn action_count(&self) -> usize;

    /// Classification of the cell at `(row, col)`
    fn cell(&self, row: usize, col: usize) -> Cell;

    /// Simulates taking `action` from `(row, col)` without committing the move.
    ///
    /// Takes `&mut self` because implementations may transiently move an
    /// internal cursor to answer; callers must not rely on any residual
    /// position state afterwards.
    fn successor(&mut self, row: usize, col: usize, action: usize) -> GridOutcome;
}

/// A stochastic grid world queried by the stochastic grid solver.
///
/// Each action yields a distribution over outcomes rather than a single
/// successor. Environments that additionally model action execution noise
/// (e.g. slip) expose it through [`StochasticGridEnv::move_probability`];
/// it is composed multiplicatively with each outcome's own probability.
pub trait StochasticGridEnv {
    /// Number of rows
    fn height(&self) -> usize;

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of actions available in every cell
    fn action_count(&self) -> usize;

    /// Classification of the cell at `(row, col)`
    fn cell(&self, row: usize, col: usize) -> Cell;

    /// All possible outcomes of taking `action` from `(row, col)`, with their
    /// probabilities. Same transient-mutation contract as
    /// [`GridEnv::successor`].
    fn outcomes(&mut self, row: usize, col: usize, action: usize) -> Vec<StochasticOutcome>;

    /// Probability that `action` is executed as intended from `(row, col)`.
    ///
    /// Defaults to 1.0 for environments without execution noise. The solver
    /// does not require the composed probabilities to sum to 1 over actions
    /// or outcomes.
    fn move_probability(&self, _row: usize, _col: usize, _action: usize) -> f64 {
        1.0
    }
}
