//! Dynamic-programming value iteration for finite Markov Decision Processes.
//!
//! Three solver variants share one algorithmic skeleton: a tabular solver
//! over an explicit transition table, a deterministic grid-world solver that
//! queries simulated steps, and a stochastic grid-world solver that takes
//! expectations over outcome distributions.

pub mod dp;
pub mod env;
pub mod error;

pub use dp::{
    grid_world_value_iteration, mdp_value_iteration, stochastic_grid_world_value_iteration,
};
pub use env::{
    Cell, GridEnv, GridOutcome, StochasticGridEnv, StochasticOutcome, TableMdp, TabularMdp,
};
pub use error::{Error, Result};
