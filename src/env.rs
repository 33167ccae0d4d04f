pub mod grid;
pub mod tabular;

pub use grid::{Cell, GridEnv, GridOutcome, StochasticGridEnv, StochasticOutcome};
pub use tabular::{TableMdp, TabularMdp};
