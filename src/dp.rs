pub mod grid_world;
pub mod stochastic_grid_world;
pub mod tabular;

// Re-export the solver entry points
pub use grid_world::grid_world_value_iteration;
pub use stochastic_grid_world::{stochastic_grid_world_value_iteration, value_iteration_per_state};
pub use tabular::mdp_value_iteration;
